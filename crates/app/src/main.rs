//! CRM Desk - terminal front end for the CRM backend
//!
//! Every page is addressed by its route path (`crmdesk open /dashboard/leads`).
//! Rendered pages go to stdout; toasts and logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crmdesk_domain::{NewReturn, Registration, Role};
use crmdesk_infra::config::{self, env_bool};
use crmdesk_lib::pages::{LoginPage, RegisterPage};
use crmdesk_lib::utils::logging::{init_tracing, LOG_JSON_ENV};
use crmdesk_lib::{act, open, AppContext, PageAction, PageFilters, PageOutcome, Route};

/// crmdesk: sales, staff and warehouse dashboards in the terminal
#[derive(Parser)]
#[command(name = "crmdesk")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page by route path
    Open {
        /// Route path, e.g. /dashboard/leaves/pending
        route: String,

        /// Narrow the list by text
        #[arg(short, long, default_value = "")]
        query: String,

        /// Narrow leads or leave requests by status
        #[arg(short, long)]
        status: Option<String>,

        /// Approve the leave request with this id
        #[arg(long, conflicts_with = "reject")]
        approve: Option<String>,

        /// Reject the leave request with this id
        #[arg(long)]
        reject: Option<String>,

        /// Reset the password of this user id (needs --password)
        #[arg(long, requires = "password")]
        reset_password: Option<String>,

        /// New password for --reset-password
        #[arg(long)]
        password: Option<String>,
    },

    /// File a warehouse return
    CreateReturn {
        /// Warehouse item id
        #[arg(long)]
        item: String,

        /// Returned quantity
        #[arg(long)]
        quantity: u32,

        /// Why the goods came back
        #[arg(long)]
        reason: String,

        /// Delivery challan the goods shipped on
        #[arg(long)]
        challan: Option<String>,
    },

    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in with it
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Requested role (admin, manager, sales, hr, warehouse, employee)
        #[arg(long)]
        role: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show or change the sidebar preference
    Sidebar {
        #[command(subcommand)]
        action: SidebarAction,
    },

    /// List every route
    Routes,
}

#[derive(Subcommand)]
enum SidebarAction {
    /// Print whether the sidebar is collapsed
    Show,
    /// Flip the preference
    Toggle,
    Collapse,
    Expand,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(env_bool(LOG_JSON_ENV, false));

    let config = config::load().context("failed to load configuration")?;
    let ctx = AppContext::new(config).context("failed to initialise application")?;

    let result = run(&ctx, cli.command).await;
    flush_toasts(&ctx);
    result
}

async fn run(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Open { route, query, status, approve, reject, reset_password, password } => {
            let route: Route = route.parse()?;
            let filters = PageFilters { query, status };

            let action = match (approve, reject, reset_password) {
                (Some(id), _, _) => Some(PageAction::ApproveLeave(id)),
                (_, Some(id), _) => Some(PageAction::RejectLeave(id)),
                (_, _, Some(user_id)) => Some(PageAction::ResetPassword {
                    user_id,
                    password: password.unwrap_or_default(),
                }),
                _ => None,
            };

            let outcome = match action {
                Some(action) => act(ctx, route, action, &filters).await?,
                None => open(ctx, route, &filters).await?,
            };
            show(outcome);
        }
        Commands::CreateReturn { item, quantity, reason, challan } => {
            let request = NewReturn { item_id: item, quantity, reason, challan_number: challan };
            let outcome =
                act(ctx, Route::Returns, PageAction::CreateReturn(request), &PageFilters::default())
                    .await?;
            show(outcome);
        }
        Commands::Login { email, password } => {
            if let Some(profile) = LoginPage::new(ctx).submit(ctx, &email, &password).await {
                say(&format!("Welcome back, {}", profile.name));
            }
        }
        Commands::Register { name, email, password, role } => {
            let registration =
                Registration { name, email, password, role: role.as_deref().map(Role::from) };
            if let Some(profile) = RegisterPage::new(ctx).submit(ctx, registration).await {
                say(&format!("Welcome, {} ({})", profile.name, profile.role));
            }
        }
        Commands::Logout => {
            ctx.sessions.logout()?;
            say("Signed out");
        }
        Commands::Sidebar { action } => {
            let collapsed = match action {
                SidebarAction::Show => ctx.sidebar.is_collapsed(),
                SidebarAction::Toggle => ctx.sidebar.toggle()?,
                SidebarAction::Collapse => {
                    ctx.sidebar.set_collapsed(true)?;
                    true
                }
                SidebarAction::Expand => {
                    ctx.sidebar.set_collapsed(false)?;
                    false
                }
            };
            say(if collapsed { "sidebar: collapsed" } else { "sidebar: expanded" });
        }
        Commands::Routes => {
            for route in Route::ALL {
                let access = if route.is_protected() { "signed in" } else { "public" };
                say(&format!("{:<32} {:<24} {access}", route.path(), route.title()));
            }
        }
    }
    Ok(())
}

fn show(outcome: PageOutcome) {
    match outcome {
        PageOutcome::Rendered(page) => say(page.trim_end()),
        PageOutcome::Redirect(target) => {
            say(&format!("Not signed in; redirected to {target}. Run `crmdesk login` first."));
        }
    }
}

#[allow(clippy::print_stdout)]
fn say(text: &str) {
    println!("{text}");
}

#[allow(clippy::print_stderr)]
fn flush_toasts(ctx: &AppContext) {
    for toast in ctx.toasts.drain() {
        eprintln!("[{}] {}", toast.level, toast.message);
    }
}
