use std::io::{BufRead, Write};
use std::path::PathBuf;

use eyre::{Result, bail, eyre};
use tracing::info;

use carematch_api::{ApiClient, insurer, patient};
use carematch_auth::flows::{self, LoginOutcome};
use carematch_auth::session::{Session, SessionStore};
use carematch_core::models::appointment::AppointmentRequest;
use carematch_core::models::care::RiskFactors;
use carematch_core::models::insurer::{InsurerSignup, InsurerUpdate};
use carematch_core::models::patient::{PatientSignup, PatientUpdate};
use carematch_core::models::session::{PatientStatus, Role};
use carematch_instruments::error::InstrumentError;
use carematch_instruments::scoring::{AnswerSet, ScoreResult};
use carematch_instruments::session::AssessmentSession;
use carematch_instruments::{Instrument, all_instruments, get_instrument};

use crate::cli::{Cli, Command, ConfigAction};
use crate::config::{self, CarematchConfig};
use crate::interactive;

/// Everything a command needs, resolved once from flags, environment and
/// the saved config.
#[derive(Debug)]
pub struct Context {
    pub config_dir: PathBuf,
    pub config: CarematchConfig,
    pub client: ApiClient,
    pub store: SessionStore,
}

impl Context {
    /// `api_url` (flag or `CAREMATCH_API_URL`) wins over the saved config.
    pub fn resolve(api_url: Option<&str>, config_dir: Option<PathBuf>) -> Result<Self> {
        let config_dir = match config_dir {
            Some(dir) => dir,
            None => config::default_config_dir()?,
        };
        let config = config::load_or_default(&config_dir)?;
        let base_url = api_url.unwrap_or(&config.api_base_url);
        let client = ApiClient::new(base_url, config.timeout());
        let store = SessionStore::new(config_dir.clone());

        Ok(Self {
            config_dir,
            config,
            client,
            store,
        })
    }

    fn session_as(&self, role: Role) -> Result<Session> {
        let session = self.store.require()?;
        flows::require_role(&session, role)?;
        Ok(session)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let ctx = Context::resolve(cli.api_url.as_deref(), cli.config_dir)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(&ctx, cli.command, &mut stdin.lock(), &mut stdout.lock())
}

/// Run one subcommand. Command output goes to `output`; logs go to stderr.
pub fn execute<R: BufRead, W: Write>(
    ctx: &Context,
    command: Command,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    match command {
        Command::Login {
            role,
            email,
            password,
        } => {
            let outcome = flows::login(&ctx.client, &ctx.store, role.into(), &email, &password)?;
            print_outcome(output, &outcome)?;
        }

        Command::SignupPatient {
            name,
            age,
            gender,
            contact_no,
            email,
            password,
            address,
            district,
            country,
            status,
        } => {
            let signup = PatientSignup {
                name,
                age,
                gender,
                contact_no,
                email,
                password,
                address,
                district,
                country,
                status: PatientStatus::from(status).as_str().to_string(),
            };
            let outcome = flows::signup_patient(&ctx.client, &ctx.store, &signup)?;
            print_outcome(output, &outcome)?;
        }

        Command::SignupInsurer {
            company_name,
            email,
            password,
            contact_no,
            address,
            district,
            country,
        } => {
            let signup = InsurerSignup {
                company_name,
                email,
                password,
                contact_no,
                address,
                district,
                country,
            };
            let outcome = flows::signup_insurer(&ctx.client, &ctx.store, &signup)?;
            print_outcome(output, &outcome)?;
        }

        Command::Logout => {
            flows::logout(&ctx.store)?;
            writeln!(output, "Logged out.")?;
        }

        Command::Whoami => match ctx.store.load()? {
            None => writeln!(output, "Not logged in.")?,
            Some(session) => {
                writeln!(output, "{} {}", session.role(), session.user_id())?;
                if let Some(status) = &session.user.status {
                    writeln!(output, "status: {status}")?;
                }
                writeln!(output, "logged in at {}", session.saved_at)?;
            }
        },

        Command::Instruments => {
            for instrument in all_instruments() {
                writeln!(
                    output,
                    "{}\t{} ({} questions)",
                    instrument.id(),
                    instrument.name(),
                    instrument.question_count()
                )?;
            }
        }

        Command::TakeTest {
            instrument,
            no_submit,
        } => {
            // Require the login before the test starts, not after.
            let session = if no_submit {
                None
            } else {
                Some(ctx.session_as(Role::Patient)?)
            };

            let mut assessment = AssessmentSession::new(lookup(&instrument)?);
            let Some(result) = interactive::run_test(&mut assessment, input, output)? else {
                writeln!(output, "Test abandoned.")?;
                return Ok(());
            };

            match session {
                Some(session) => submit(ctx, &session, &result, output)?,
                None => writeln!(output, "Not submitted.")?,
            }
        }

        Command::Score {
            instrument,
            weights,
            json,
            submit: send,
        } => {
            let instrument = lookup(&instrument)?;
            let mut answers = AnswerSet::new();
            for (index, weight) in weights.into_iter().enumerate() {
                instrument.record(&mut answers, index, weight)?;
            }

            if send && !instrument.is_complete(&answers) {
                bail!(
                    "only {} of {} questions answered; every question needs an answer before submitting",
                    answers.len(),
                    instrument.question_count()
                );
            }
            // Check the session before printing anything.
            let session = if send {
                Some(ctx.session_as(Role::Patient)?)
            } else {
                None
            };

            let result = instrument.score(&answers)?;
            if json {
                writeln!(output, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                write!(output, "{}", instrument.summary_text(&answers)?)?;
            }

            if let Some(session) = session {
                submit(ctx, &session, &result, output)?;
            }
        }

        Command::Profile => {
            let session = ctx.store.require()?;
            match session.role() {
                Role::Patient => {
                    let profile = patient::me(&ctx.client, &session.token)?;
                    writeln!(
                        output,
                        "{} ({}, {})",
                        profile.name, profile.age, profile.gender
                    )?;
                    writeln!(
                        output,
                        "{}, {}, {}",
                        profile.address, profile.district, profile.country
                    )?;
                    writeln!(output, "status: {}", profile.status)?;
                }
                Role::Insurer => {
                    let profile = insurer::profile(&ctx.client, &session.token)?;
                    writeln!(output, "{} <{}>", profile.company_name, profile.email)?;
                    writeln!(
                        output,
                        "{}, {}, {}",
                        profile.address, profile.district, profile.country
                    )?;
                    writeln!(output, "contact: {}", profile.contact_no)?;
                }
            }
        }

        Command::UpdatePatient {
            name,
            age,
            gender,
            address,
            district,
            country,
            status,
        } => {
            let session = ctx.session_as(Role::Patient)?;
            let update = PatientUpdate {
                name,
                age,
                gender,
                address,
                district,
                country,
                status: status.map(|s| PatientStatus::from(s).as_str().to_string()),
            };
            let profile = patient::update(&ctx.client, &session.token, &update)?;
            writeln!(output, "Profile updated for {}.", profile.name)?;
        }

        Command::UpdateInsurer {
            company_name,
            contact_no,
            address,
            district,
            country,
        } => {
            let session = ctx.session_as(Role::Insurer)?;
            let update = InsurerUpdate {
                company_name,
                contact_no,
                address,
                district,
                country,
            };
            let profile = insurer::update(&ctx.client, &session.token, &update)?;
            writeln!(output, "Profile updated for {}.", profile.company_name)?;
        }

        Command::Assess {
            age,
            gender,
            mood_score,
            sleep_quality,
            stress_level,
            emotional_state,
        } => {
            let session = ctx.session_as(Role::Patient)?;
            let mood_score = match mood_score {
                Some(score) => score,
                None => patient::summary(&ctx.client, session.user_id())?
                    .moodscore
                    .ok_or_else(|| {
                        eyre!("no mood score on record; take the test first or pass --mood-score")
                    })?,
            };
            let factors = RiskFactors {
                age,
                gender,
                mood_score,
                sleep_quality,
                stress_level,
                emotional_state,
            };
            let outcome = flows::predict_risk(&ctx.client, &session, factors)?;
            writeln!(
                output,
                "Risk level {} stored. Next: {}",
                outcome.risk_level,
                outcome.landing.path()
            )?;
        }

        Command::CarePlan => {
            let session = ctx.session_as(Role::Patient)?;
            let plan = flows::care_plan(&ctx.client, &session)?;
            let info = &plan.patient_info;
            writeln!(
                output,
                "{} ({}, {})\tcondition: {}\trisk: {}",
                info.name,
                info.age,
                info.gender,
                info.disease_name.as_deref().unwrap_or("-"),
                info.risk_level.as_deref().unwrap_or("-"),
            )?;
            for line in plan.suggestion_lines() {
                writeln!(output, "{line}")?;
            }
            if plan.providers.is_empty() {
                writeln!(output, "No providers suggested.")?;
            }
            for provider in &plan.providers {
                writeln!(
                    output,
                    "{}\t{}\t{}\t{}",
                    provider.id, provider.company_name, provider.country, provider.contact_no
                )?;
            }
        }

        Command::Providers => {
            let session = ctx.session_as(Role::Patient)?;
            let providers = patient::providers(&ctx.client, &session.token, session.user_id())?;
            if providers.is_empty() {
                writeln!(output, "No insurers found in your district.")?;
            }
            for provider in providers {
                writeln!(
                    output,
                    "{}\t{}\t{}, {}\t{}",
                    provider.id,
                    provider.company_name,
                    provider.district,
                    provider.country,
                    provider.contact_no
                )?;
            }
        }

        Command::Apply { insurer_id } => {
            let session = ctx.session_as(Role::Patient)?;
            let response =
                patient::apply(&ctx.client, &session.token, insurer_id, session.user_id())?;
            writeln!(
                output,
                "Applied to {} (application {}, {}).",
                response.insurer_name, response.application_id, response.appln_status
            )?;
        }

        Command::Applications { pending } => {
            let session = ctx.session_as(Role::Insurer)?;
            let applications = insurer::applications(&ctx.client, &session.token)?;
            let shown: Vec<_> = applications
                .into_iter()
                .filter(|a| !pending || a.is_pending())
                .collect();
            if shown.is_empty() {
                writeln!(output, "No applications.")?;
            }
            for application in shown {
                writeln!(
                    output,
                    "{}\t{} ({}, {})\trisk: {}\tmood score: {}\t{}",
                    application.application_id,
                    application.name,
                    application.age,
                    application.gender,
                    application.risk_level.as_deref().unwrap_or("-"),
                    application
                        .mood_score
                        .map_or_else(|| "-".to_string(), |s| s.to_string()),
                    application.appln_status.as_deref().unwrap_or("pending"),
                )?;
            }
        }

        Command::Decide {
            application_id,
            decision,
        } => {
            let session = ctx.session_as(Role::Insurer)?;
            let response =
                insurer::decide(&ctx.client, &session.token, application_id, decision.into())?;
            writeln!(output, "{}", response.message)?;
        }

        Command::Book { application_id, at } => {
            let session = ctx.session_as(Role::Insurer)?;
            let request = AppointmentRequest {
                application_id,
                scheduled_datetime: at,
            };
            let response = insurer::book_appointment(&ctx.client, &session.token, &request)?;
            writeln!(output, "{} ({}).", response.message, response.appt_status)?;
        }

        Command::Config { action } => configure(ctx, action, output)?,
    }

    Ok(())
}

fn lookup(id: &str) -> Result<Box<dyn Instrument>> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()).into())
}

fn print_outcome<W: Write>(output: &mut W, outcome: &LoginOutcome) -> Result<()> {
    writeln!(
        output,
        "Logged in as {} {}. Next: {}",
        outcome.session.role(),
        outcome.session.user_id(),
        outcome.landing.path()
    )?;
    Ok(())
}

fn submit<W: Write>(
    ctx: &Context,
    session: &Session,
    result: &ScoreResult,
    output: &mut W,
) -> Result<()> {
    let landing = flows::submit_mood_score(&ctx.client, session, result)?;
    writeln!(
        output,
        "Score {} submitted. Next: {}",
        result.total_score,
        landing.path()
    )?;
    Ok(())
}

fn configure<W: Write>(ctx: &Context, action: ConfigAction, output: &mut W) -> Result<()> {
    match action {
        ConfigAction::Show => {
            writeln!(output, "{}", serde_json::to_string_pretty(&ctx.config)?)?;
            writeln!(output, "effective api url: {}", ctx.client.base_url())?;
            writeln!(
                output,
                "stored at: {}",
                config::config_path(&ctx.config_dir).display()
            )?;
        }
        ConfigAction::SetUrl { url } => {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(eyre!("api url must start with http:// or https://"));
            }
            let mut updated = ctx.config.clone();
            updated.api_base_url = url.trim_end_matches('/').to_string();
            config::save_config(&ctx.config_dir, &updated)?;
            info!(url = %updated.api_base_url, "api url updated");
            writeln!(output, "api url set to {}", updated.api_base_url)?;
        }
        ConfigAction::SetTimeout { secs } => {
            if secs == 0 {
                bail!("timeout must be at least one second");
            }
            let mut updated = ctx.config.clone();
            updated.request_timeout_secs = secs;
            config::save_config(&ctx.config_dir, &updated)?;
            writeln!(output, "request timeout set to {secs}s")?;
        }
    }
    Ok(())
}
