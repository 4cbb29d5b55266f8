use crate::infra::InMemoryCmsGateway;
use clap::Args;
use raices::calculators::{financing, fractional, FinancingRequest, RateKind};
use raices::error::AppError;
use raices::intake::{ApplicationForm, ApplicationService, InvestmentType, ResidencyStatus, RiskProfile};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct FinancingArgs {
    /// Property price in EUR (50,000 – 500,000)
    #[arg(long, default_value_t = 200_000)]
    pub(crate) price: u32,
    /// Down payment as a percentage of the price (15 – 100)
    #[arg(long, default_value_t = 15)]
    pub(crate) down_percent: u8,
    /// Loan term in years (5 – 30)
    #[arg(long, default_value_t = 15)]
    pub(crate) years: u8,
    /// Use the variable rate (17%) instead of the fixed rate (14%)
    #[arg(long)]
    pub(crate) variable: bool,
}

#[derive(Args, Debug)]
pub(crate) struct FractionalArgs {
    /// Property price in EUR
    #[arg(long, default_value_t = fractional::REFERENCE_PROPERTY_PRICE)]
    pub(crate) price: u32,
    /// Stake as a percentage of the property (up to 50)
    #[arg(long, conflicts_with = "amount")]
    pub(crate) share: Option<f64>,
    /// Stake as an absolute amount in EUR (200 – 100,000)
    #[arg(long)]
    pub(crate) amount: Option<u32>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the application intake portion of the demo
    #[arg(long)]
    pub(crate) skip_intake: bool,
}

pub(crate) fn run_financing_quote(args: FinancingArgs) -> Result<(), AppError> {
    let rate = if args.variable {
        RateKind::Variable
    } else {
        RateKind::Fixed
    };
    let quote = financing::quote(FinancingRequest {
        property_price: args.price,
        down_payment_percent: args.down_percent,
        term_years: args.years,
        rate,
    });

    render_financing_quote(&quote);
    Ok(())
}

pub(crate) fn run_fractional_quote(args: FractionalArgs) -> Result<(), AppError> {
    let quote = match (args.amount, args.share) {
        (Some(amount), _) => fractional::quote_by_amount(args.price, amount),
        (None, Some(share)) => fractional::quote_by_share(args.price, share),
        (None, None) => fractional::quote_by_share(args.price, 5.0),
    };

    render_fractional_quote(&quote);
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Financing quote (200,000 EUR, 15% down, 15 years, fixed)");
    let financing_quote = financing::quote(FinancingRequest {
        property_price: 200_000,
        down_payment_percent: 15,
        term_years: 15,
        rate: RateKind::Fixed,
    });
    render_financing_quote(&financing_quote);

    println!("\nFractional quote (5% of the reference property)");
    let fractional_quote =
        fractional::quote_by_share(fractional::REFERENCE_PROPERTY_PRICE, 5.0);
    render_fractional_quote(&fractional_quote);

    if args.skip_intake {
        return Ok(());
    }

    println!("\nApplication intake demo (credential redacted)");
    let gateway = Arc::new(InMemoryCmsGateway::default());
    let service = ApplicationService::new(Some(gateway.clone()), None);

    let receipt = match service.submit(demo_application_form()).await {
        Ok(receipt) => receipt,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Application accepted -> status {} (persisted: {})",
        receipt.status.label(),
        receipt.persisted
    );

    for (collection, record) in gateway.inserted() {
        println!(
            "- Stored in '{}': {} <{}> from {}, investment {:?}, share {}%",
            collection,
            record.full_name,
            record.email,
            record.country_of_origin,
            record.investment_type.map(InvestmentType::label),
            record.share_percent
        );
    }

    Ok(())
}

fn render_financing_quote(quote: &financing::FinancingQuote) {
    println!(
        "- Price {} EUR | {}% down over {} years at the {} rate",
        quote.property_price,
        quote.down_payment_percent,
        quote.term_years,
        quote.rate.label()
    );
    println!("- Down payment: {} EUR", quote.down_payment);
    println!("- Loan amount: {} EUR", quote.loan_amount);
    println!("- Monthly payment: {} EUR", quote.monthly_payment);
    println!(
        "- Transfer tax {} EUR + acquisition costs {} EUR",
        quote.transfer_tax, quote.acquisition_costs
    );
    println!("- Total upfront: {} EUR", quote.total_upfront);
}

fn render_fractional_quote(quote: &fractional::FractionalQuote) {
    println!(
        "- {:.1}% of a {} EUR property = {} EUR invested",
        quote.share_percent, quote.property_price, quote.investment_amount
    );
    println!(
        "- Projected annual rental income: {} – {} EUR (net of the 10% management fee)",
        quote.projected_income_low, quote.projected_income_high
    );
}

fn demo_application_form() -> ApplicationForm {
    ApplicationForm {
        full_name: "Demo Applicant".to_string(),
        email: "Demo.Applicant@Example.com".to_string(),
        phone: "+34 600 000 000".to_string(),
        country_of_origin: String::new(),
        password: "demo-secret-1234".to_string(),
        confirm_password: Some("demo-secret-1234".to_string()),
        residency: Some(ResidencyStatus::InProcess),
        investment_type: Some(InvestmentType::Fractional),
        budget_range: "€10,000 – €25,000".to_string(),
        deposit_ready: "within 3 months".to_string(),
        share_range: 5.0,
        risk_profile: Some(RiskProfile::Conservative),
    }
}
