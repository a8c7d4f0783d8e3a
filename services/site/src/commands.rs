use crate::infra::load_redirects;
use clap::{Args, Subcommand};
use lead_intake::config::AppConfig;
use lead_intake::error::AppError;
use lead_intake::intake::{
    Field, FormController, FormVariant, HttpIntakeTransport, SubmitOutcome, VariantKind,
};
use lead_intake::redirects::RedirectTable;
use lead_intake::telemetry;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Subcommand, Debug)]
pub(crate) enum LeadCommand {
    /// Check field values against a form's rules without sending anything
    Validate(LeadArgs),
    /// Validate and post a lead to the configured intake endpoint
    Submit(LeadSubmitArgs),
}

#[derive(Args, Debug)]
pub(crate) struct LeadArgs {
    /// Form variant slug: contact, plumbing, sewer-drain, waterproofing, emergency,
    /// booking-quick or booking-schedule
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: VariantKind,
    /// Field value as name=value, e.g. --field firstName=Jane (repeatable)
    #[arg(long = "field", value_parser = parse_field)]
    pub(crate) fields: Vec<(Field, String)>,
}

#[derive(Args, Debug)]
pub(crate) struct LeadSubmitArgs {
    #[command(flatten)]
    pub(crate) lead: LeadArgs,
    /// Page path reported as the lead's sourcePage
    #[arg(long, default_value = "/")]
    pub(crate) source_page: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum RedirectCommand {
    /// Print where a legacy path redirects, if anywhere
    Resolve {
        /// Request path, e.g. /contact-us.html
        path: String,
    },
    /// Print every redirect in the table
    List,
}

pub(crate) fn parse_variant(raw: &str) -> Result<VariantKind, String> {
    raw.parse::<VariantKind>().map_err(|err| err.to_string())
}

pub(crate) fn parse_field(raw: &str) -> Result<(Field, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let field = name.parse::<Field>().map_err(|err| err.to_string())?;
    Ok((field, value.to_string()))
}

pub(crate) async fn run_lead(command: LeadCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;

    let (args, source_page) = match command {
        LeadCommand::Validate(args) => (args, None),
        LeadCommand::Submit(args) => (args.lead, Some(args.source_page)),
    };

    let transport = Arc::new(HttpIntakeTransport::new(config.intake.endpoint.clone()));
    let mut form = FormController::new(
        FormVariant::for_kind(args.variant),
        transport,
        config.intake.fallback_phone.clone(),
    );
    for (field, value) in &args.fields {
        form.update_field(*field, value)?;
    }

    let Some(source_page) = source_page else {
        let report = form.validate();
        if report.valid {
            println!("{} form: valid", args.variant);
        } else {
            println!("{} form: invalid", args.variant);
            print_errors(&report.errors);
        }
        return Ok(());
    };

    println!("Submitting {} lead to {}", args.variant, config.intake.endpoint);
    match form.submit(&source_page).await? {
        SubmitOutcome::Invalid(errors) => {
            println!("Not sent; fix the following fields:");
            print_errors(&errors);
        }
        SubmitOutcome::Submitted { message } => println!("Success: {message}"),
        SubmitOutcome::Failed { message } => println!("Error: {message}"),
    }
    println!("Form status: {}", form.status().label());

    Ok(())
}

fn print_errors(errors: &BTreeMap<Field, String>) {
    for (field, message) in errors {
        println!("- {field}: {message}");
    }
}

pub(crate) fn run_redirects(command: RedirectCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let table = load_redirects(&config.redirects)?;

    match command {
        RedirectCommand::Resolve { path } => print_resolution(&table, &path),
        RedirectCommand::List => {
            println!("{} permanent redirects", table.len());
            for (from, to) in table.iter() {
                println!("- {from} -> {to}");
            }
        }
    }

    Ok(())
}

fn print_resolution(table: &RedirectTable, path: &str) {
    match table.resolve(path) {
        Some(to) => println!("{path} -> {to} (301)"),
        None => println!("{path}: no redirect (normal routing applies)"),
    }
}
