use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Input;
use dotenvy::dotenv;
use edugate_auth::create_access_token;
use edugate_cli::report;
use edugate_config::JwtConfig;
use edugate_core::{CheckMode, PermissionResolver, Role};
use edugate_observability::init_basic_console_logging;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "edugate-cli")]
#[command(about = "Edugate CLI - Inspect roles, permissions and dashboards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every role with its number of permissions
    Roles,
    /// List the permissions a role holds
    Permissions {
        /// Role name, e.g. teacher
        #[arg(short = 'r', long)]
        role: String,
    },
    /// Check whether a role holds any or all of the given permissions
    Check {
        /// Role name, e.g. teacher
        #[arg(short = 'r', long)]
        role: String,

        /// How the permissions are combined
        #[arg(short = 'm', long, value_enum, default_value = "all")]
        mode: Mode,

        /// Permission names, e.g. mark_attendance
        permissions: Vec<String>,
    },
    /// Show which dashboard a role is served
    Dashboard {
        /// Role name, e.g. teacher
        #[arg(short = 'r', long)]
        role: String,
    },
    /// Issue a signed development token
    IssueToken {
        /// Role claim to embed (not validated)
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// User ID (random if omitted)
        #[arg(short = 'u', long)]
        user_id: Option<Uuid>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Any,
    All,
}

impl From<Mode> for CheckMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Any => CheckMode::Any,
            Mode::All => CheckMode::All,
        }
    }
}

fn main() {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();
    let resolver = PermissionResolver::standard();

    match cli.command {
        Commands::Roles => print_lines(report::roles(&resolver)),
        Commands::Permissions { role } => print_lines(report::permissions(&resolver, &role)),
        Commands::Check {
            role,
            mode,
            permissions,
        } => println!(
            "{}",
            report::check(&resolver, &role, mode.into(), &permissions)
        ),
        Commands::Dashboard { role } => println!("{}", report::dashboard(&role)),
        Commands::IssueToken {
            role,
            email,
            user_id,
        } => handle_issue_token(role, email, user_id),
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn prompt(label: &str) -> String {
    match Input::new().with_prompt(label).interact_text() {
        Ok(value) => value,
        Err(e) => {
            eprintln!("\n❌ Failed to read {}: {}", label.to_lowercase(), e);
            std::process::exit(1);
        }
    }
}

fn handle_issue_token(role: Option<String>, email: Option<String>, user_id: Option<Uuid>) {
    let role = role.unwrap_or_else(|| prompt("Role"));
    let email = email.unwrap_or_else(|| prompt("Email address"));
    let user_id = user_id.unwrap_or_else(Uuid::new_v4);

    if Role::parse(&role).is_none() {
        eprintln!(
            "⚠️  '{}' is not a known role; the token will authenticate but grant nothing",
            role
        );
    }

    let jwt_config = JwtConfig::from_env();
    match create_access_token(user_id, &email, &role, &jwt_config) {
        Ok(token) => {
            println!("\n✅ Token issued");
            println!("   User ID: {}", user_id);
            println!("   Role: {}", role);
            println!("   Expires in: {}s", jwt_config.access_token_expiry);
            println!("\n{}", token);
        }
        Err(e) => {
            eprintln!("\n❌ Error issuing token: {}", e.error);
            std::process::exit(1);
        }
    }
}
