use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use carematch_core::models::application::ApplicationDecision;
use carematch_core::models::session::{PatientStatus, Role};
use carematch_instruments::instruments::mood_screen;

#[derive(Debug, Parser)]
#[command(
    name = "carematch",
    version,
    about = "Mental-health screening and insurer matching from the terminal"
)]
pub struct Cli {
    /// Backend base URL (overrides the saved config).
    #[arg(long, env = "CAREMATCH_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Directory holding config.json and session.json.
    #[arg(long, env = "CAREMATCH_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session.
    Login {
        #[arg(long, value_enum, default_value_t = RoleArg::Patient)]
        role: RoleArg,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CAREMATCH_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Register a patient account and log in.
    SignupPatient {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        contact_no: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CAREMATCH_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        district: String,
        #[arg(long)]
        country: String,
        #[arg(long, value_enum, default_value_t = StatusArg::Undiagnosed)]
        status: StatusArg,
    },

    /// Register an insurer account and log in.
    SignupInsurer {
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CAREMATCH_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        contact_no: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        district: String,
        #[arg(long)]
        country: String,
    },

    /// Forget the stored session.
    Logout,

    /// Show the logged-in account.
    Whoami,

    /// List the available questionnaires.
    Instruments,

    /// Take a questionnaire interactively, then submit the total.
    TakeTest {
        #[arg(long, default_value = mood_screen::ID)]
        instrument: String,
        /// Show the result without sending it to the backend.
        #[arg(long)]
        no_submit: bool,
    },

    /// Score comma-separated answer weights (0-3) in question order.
    Score {
        #[arg(long, default_value = mood_screen::ID)]
        instrument: String,
        #[arg(value_delimiter = ',', num_args = 1.., required = true)]
        weights: Vec<u8>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
        /// Send the total for the logged-in patient. Requires every question.
        #[arg(long)]
        submit: bool,
    },

    /// Show the logged-in account's profile.
    Profile,

    /// Change fields of your patient profile. Omitted fields are left as they are.
    UpdatePatient {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },

    /// Change fields of your insurer profile. Omitted fields are left as they are.
    UpdateInsurer {
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        contact_no: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },

    /// Run the risk assessment and store the predicted level.
    Assess {
        #[arg(long)]
        age: u32,
        #[arg(long)]
        gender: String,
        /// Defaults to the questionnaire total on record.
        #[arg(long)]
        mood_score: Option<i32>,
        /// 1-10.
        #[arg(long)]
        sleep_quality: u8,
        /// 1-10.
        #[arg(long)]
        stress_level: u8,
        #[arg(long)]
        emotional_state: String,
    },

    /// Show your care plan and the providers suggested with it.
    CarePlan,

    /// Insurers operating in your district.
    Providers,

    /// Apply to an insurer.
    Apply { insurer_id: Uuid },

    /// Applications addressed to your company.
    Applications {
        /// Only those awaiting a decision.
        #[arg(long)]
        pending: bool,
    },

    /// Accept or decline an application.
    Decide {
        application_id: Uuid,
        #[arg(value_enum)]
        decision: DecisionArg,
    },

    /// Book an appointment for an application, e.g. `--at 2026-11-02T14:30`.
    Book {
        application_id: Uuid,
        #[arg(long)]
        at: jiff::civil::DateTime,
    },

    /// Inspect or change the saved configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    Show,
    SetUrl { url: String },
    SetTimeout { secs: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Patient,
    Insurer,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Patient => Role::Patient,
            RoleArg::Insurer => Role::Insurer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Undiagnosed,
    Undertreated,
}

impl From<StatusArg> for PatientStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Undiagnosed => PatientStatus::Undiagnosed,
            StatusArg::Undertreated => PatientStatus::Undertreated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecisionArg {
    Accept,
    Decline,
}

impl From<DecisionArg> for ApplicationDecision {
    fn from(decision: DecisionArg) -> Self {
        match decision {
            DecisionArg::Accept => ApplicationDecision::Accepted,
            DecisionArg::Decline => ApplicationDecision::Declined,
        }
    }
}
