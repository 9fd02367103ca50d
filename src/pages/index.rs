//! Index Page
//!
//! Entry-flow listing: the public landing view links evaluators into either
//! the cold sign-up flow or the returning log-in flow.

use leptos::*;
use leptos_router::*;

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <div class="index">
            <h1 class="test-drive-heading">"Test Drive"</h1>
            <p class="body-text">
                "People can experience Pyrometry Pro in many different ways. We call these "
                <strong>"entry flows"</strong>
                ". The purpose of this screen is to allow you to evaluate our known entry flows."
            </p>
            <p class="body-text">
                <strong>"Read the entry flow details below then tap on the entry flow to begin."</strong>
                " Pretend to be the person described in the entry flow and do your best to perform \
                 the goals described. You will see some inputs are filled out for you."
            </p>
            <ul class="flows">
                <li>
                    <A href="/sign-up" class="flow">
                        <RightArrow />
                        <div class="flow-overview">
                            <strong>"Flow: Cold sign up for free trial"</strong>
                            <br />
                            "Pretend to be a person who wants to sign up for the free trial."
                        </div>
                        <ul class="flow-details">
                            <li class="flow-detail">
                                "You don't have an existing Pyrometry Pro account but would like \
                                 to sign up for the free trial."
                            </li>
                            <li class="flow-detail">
                                "You found Pyrometry Pro through your own research or through a referral."
                            </li>
                            <li class="flow-detail">
                                "You do not want to join an existing Pyrometry Pro organization. \
                                 You are not using a prepaid invitation."
                            </li>
                            <li class="flow-detail">
                                "To receive the free trial you are willing and able to provide basic \
                                 information about your organization, even if you are the sole member \
                                 of that organization."
                            </li>
                            <li class="flow-detail">
                                "This entry flow starts on the sign up screen."
                            </li>
                        </ul>
                    </A>
                </li>
                <li>
                    <A href="/log-in" class="flow">
                        <RightArrow />
                        <div class="flow-overview">
                            <strong>"Flow: Returning log in"</strong>
                            <br />
                            "Pretend to be a person returning to Pyrometry Pro."
                        </div>
                        <ul class="flow-details">
                            <li class="flow-detail">
                                "You previously received and accepted an invitation to join an \
                                 organization that has an active Pyrometry Pro subscription."
                            </li>
                            <li class="flow-detail">
                                "You are now returning to Pyrometry Pro to log in to your existing account."
                            </li>
                            <li class="flow-detail">
                                "This entry flow starts on the log in screen."
                            </li>
                        </ul>
                    </A>
                </li>
            </ul>
        </div>
    }
}

#[component]
fn RightArrow() -> impl IntoView {
    view! {
        <div class="right-arrow">
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="40"
                height="40"
                viewBox="0 0 24 24"
                fill="none"
                stroke="#d1d1d1"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <path d="M9 18l6-6-6-6" />
            </svg>
        </div>
    }
}
