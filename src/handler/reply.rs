use crate::config::PaymentConfig;
use crate::service::{ConfirmOutcome, IssuedCode, Plan};

pub fn start() -> String {
    t!(
        "commands.start",
        month_price = Plan::Month.price(),
        year_price = Plan::Year.price()
    )
    .into_owned()
}

pub fn help() -> String {
    t!("commands.help").into_owned()
}

/// Reply to free text: a payment link for `1`/`2`, otherwise the menu hint.
pub fn plan_choice(text: &str, payment: &PaymentConfig) -> String {
    match Plan::from_menu_choice(text) {
        Some(Plan::Month) => t!("messages.pay_link.month", link = payment.link(Plan::Month)).into_owned(),
        Some(Plan::Year) => t!("messages.pay_link.year", link = payment.link(Plan::Year)).into_owned(),
        None => t!("messages.choose_plan").into_owned(),
    }
}

pub fn confirm(outcome: &ConfirmOutcome) -> String {
    match outcome {
        ConfirmOutcome::MissingPlan => t!("commands.confirm.usage").into_owned(),
        ConfirmOutcome::InvalidPlan(_) => t!("commands.confirm.invalid_plan").into_owned(),
        ConfirmOutcome::Issued(record) => t!("commands.confirm.issued", code = record.code).into_owned(),
    }
}

pub fn code(issued: Option<&IssuedCode>) -> String {
    match issued {
        Some(issued) => {
            let plan = issued
                .plan
                .clone()
                .unwrap_or_else(|| t!("commands.code.plan_unknown").into_owned());
            t!("commands.code.found", code = issued.code, plan = plan).into_owned()
        }
        None => t!("commands.code.not_found").into_owned(),
    }
}
