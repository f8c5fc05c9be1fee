use shared::AccountSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

#[derive(Clone, PartialEq, Default)]
pub struct AccountsState {
    pub summary: AccountSummary,
    pub loading: bool,
    pub error: Option<String>,
}

/// Hook for the signed-in user's account balances
#[hook]
pub fn use_accounts(api_client: &ApiClient) -> UseStateHandle<AccountsState> {
    let accounts_state = use_state(AccountsState::default);

    // Fetch accounts on mount
    use_effect_with((), {
        let accounts_state = accounts_state.clone();
        let api_client = api_client.clone();

        move |_| {
            accounts_state.set(AccountsState {
                loading: true,
                ..AccountsState::default()
            });

            spawn_local(async move {
                match api_client.get_accounts().await {
                    Ok(summary) => {
                        Logger::debug_with_component(
                            "accounts-hook",
                            &format!("Loaded {} accounts", summary.accounts.len()),
                        );
                        accounts_state.set(AccountsState {
                            summary,
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        Logger::error_with_component("accounts-hook", &format!("Failed to fetch accounts: {}", e));
                        accounts_state.set(AccountsState {
                            summary: AccountSummary::default(),
                            loading: false,
                            error: Some(format!("Failed to fetch accounts: {}", e)),
                        });
                    }
                }
            });

            || ()
        }
    });

    accounts_state
}
