use shared::{Account, AccountSummary};
use yew::prelude::*;

use crate::components::{AnimatedCounter, DoughnutChart};

#[derive(Properties, PartialEq)]
pub struct BalanceSummaryProps {
    pub accounts: Vec<Account>,
    pub total_banks: usize,
    pub total_current_balance: f64,
}

#[function_component(BalanceSummary)]
pub fn balance_summary(props: &BalanceSummaryProps) -> Html {
    let summary = AccountSummary {
        accounts: props.accounts.clone(),
        total_banks: props.total_banks,
        total_current_balance: props.total_current_balance,
    };

    html! {
        <section class="total-balance">
            <div class="total-balance-chart">
                <DoughnutChart slices={summary.distribution()} />
            </div>
            <div class="total-balance-info">
                <h2 class="header-2">{summary.heading()}</h2>
                <div class="total-balance-body">
                    <p class="total-balance-label">{"Total Current Balance"}</p>
                    <AnimatedCounter amount={summary.total_current_balance} />
                </div>
            </div>
        </section>
    }
}
