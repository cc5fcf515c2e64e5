//! `billed` — headless demo shell over the bills core.
//!
//! Drives the router against the in-memory gateway: seeds a session, feeds
//! user actions through the intent loop, and prints the resulting view
//! models as text.

use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use billed_store::{FileUpload, MemoryGateway, MemorySessionStore};
use bills::{
    BillForm, Body, Deps, Intent, Navigation, Page, RoutePath, Router, Session, UserType,
};

/// Billed demo shell.
#[derive(Parser, Debug)]
#[command(name = "billed", about = "Billed expense-bill demo shell")]
struct Cli {
    /// Email of the seeded session.
    #[arg(long = "email", global = true, default_value = "a@a")]
    email: String,

    /// Role of the seeded session.
    #[arg(long = "role", global = true, value_enum, default_value = "employee")]
    role: Role,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Role {
    Employee,
    Admin,
}

impl From<Role> for UserType {
    fn from(role: Role) -> Self {
        match role {
            Role::Employee => UserType::Employee,
            Role::Admin => UserType::Admin,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the bill list.
    Bills,

    /// Submit a new bill and render where it lands.
    New {
        /// Justification file (jpg, jpeg or png).
        #[arg(long = "file")]
        file: std::path::PathBuf,

        /// Expense type, e.g. "Transports".
        #[arg(long = "type")]
        expense_type: String,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "amount")]
        amount: f64,

        /// Date, `YYYY-MM-DD`.
        #[arg(long = "date")]
        date: String,

        #[arg(long = "vat")]
        vat: Option<f64>,

        #[arg(long = "pct")]
        pct: Option<f64>,

        #[arg(long = "commentary")]
        commentary: Option<String>,
    },

    /// Navigate to a raw URL and render whatever it resolves to.
    Route {
        /// e.g. "#employee/bills" or "#admin/dashboard".
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let gateway = Arc::new(MemoryGateway::seeded());
    let sessions = Arc::new(MemorySessionStore::new());
    Session::new(cli.role.into(), cli.email.clone()).save(sessions.as_ref())?;
    info!(email = %cli.email, role = ?cli.role, "session seeded");

    let router = Router::new(Deps {
        bills: gateway.clone(),
        files: gateway,
        sessions,
    });

    match cli.command {
        Commands::Bills => {
            show(router.navigate(RoutePath::Bills).await);
        }

        Commands::New {
            file,
            expense_type,
            name,
            amount,
            date,
            vat,
            pct,
            commentary,
        } => {
            let upload = FileUpload {
                file_name: file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                content: std::fs::read(&file)?,
            };

            let view = router.new_bill_view();
            if let Intent::ShowError(message) = view.handle_change_file(upload) {
                anyhow::bail!(message);
            }

            let intent = view
                .handle_submit(BillForm {
                    expense_type,
                    name,
                    amount,
                    date,
                    vat,
                    pct,
                    commentary,
                })
                .await;
            match intent {
                Intent::ShowError(message) => anyhow::bail!(message),
                intent => match router.dispatch(intent).await {
                    Some(navigation) => show(navigation),
                    None => anyhow::bail!("the bill was not submitted"),
                },
            }
        }

        Commands::Route { url } => {
            let path = RoutePath::from_url(&url)
                .ok_or_else(|| anyhow::anyhow!("unknown url: {url}"))?;
            show(router.navigate(path).await);
        }
    }

    Ok(())
}

fn show(navigation: Navigation) {
    let page = match navigation {
        Navigation::Rendered(page) => page,
        Navigation::Superseded => return,
    };
    print_page(&page);
}

fn print_page(page: &Page) {
    println!("=== {} ({})", page.title, page.route.as_url());
    match &page.body {
        Body::BillTable { rows, error, .. } => {
            if let Some(message) = error {
                println!("{message}");
                return;
            }
            println!(
                "{:<24} {:<12} {:>10}  {:<12} {}",
                "Type", "Nom", "Montant", "Date", "Statut"
            );
            for row in rows {
                println!(
                    "{:<24} {:<12} {:>9}€  {:<12} {}",
                    row.expense_type, row.name, row.amount, row.formatted_date, row.status_label
                );
            }
        }
        Body::NewBillForm { file_error } => {
            if let Some(message) = file_error {
                println!("{message}");
            }
        }
        Body::Login | Body::Dashboard => {}
    }
}
