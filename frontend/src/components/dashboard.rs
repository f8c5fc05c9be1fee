use yew::prelude::*;

use crate::components::BalanceSummary;
use crate::hooks::use_accounts;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub api_client: ApiClient,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let accounts = use_accounts(&props.api_client);

    html! {
        <section class="home">
            <div class="home-content">
                <header class="home-header">
                    <h1 class="header-box-title">{"Welcome"}</h1>
                    <p class="header-box-subtext">{"Access and manage your account and transactions efficiently."}</p>
                </header>

                {if let Some(error) = accounts.error.as_ref() {
                    html! {
                        <div class="form-message error">{error}</div>
                    }
                } else { html! {} }}

                {if accounts.loading {
                    html! {
                        <div class="loading">
                            <div class="loading-spinner"></div>
                            <p>{"Loading accounts..."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <BalanceSummary
                            accounts={accounts.summary.accounts.clone()}
                            total_banks={accounts.summary.total_banks}
                            total_current_balance={accounts.summary.total_current_balance}
                        />
                    }
                }}
            </div>
        </section>
    }
}
