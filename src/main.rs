//! users-console
//!
//! A console client for a conventional JSON users backend: list users, add a
//! user, edit a user, over `GET/POST /users.json` and `PATCH /users/{id}.json`.

mod api;
mod config;
mod errors;
mod manager;
mod models;
mod presenter;

use std::fmt;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::UsersApiClient;
use config::Config;
use manager::UsersManager;
use models::{CreateUserRequest, UpdateUserRequest, User, UserItem};
use presenter::{
    EditUserPresenter, EditUserView, UserItemHolder, UsersListPresenter, UsersView,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting users-console");
    tracing::info!("Backend base URL: {}", config.base_url);

    let client = UsersApiClient::new(&config.base_url, config.http_timeout)?;
    let manager = UsersManager::new(client);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let ok = match args.first().map(String::as_str) {
        None | Some("list") => run_list(manager).await,
        Some("add") => run_add(manager, &args[1..]).await,
        Some("update") => run_update(manager, &args[1..]).await,
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  users-console [list]");
    eprintln!("  users-console add <first> <last> <email> [avatar-url]");
    eprintln!("  users-console update <id> [--first X] [--last X] [--email X] [--avatar X]");
}

/// Terminal rendering surface for the list screen. Status goes to stderr so
/// the user table stays clean on stdout.
#[derive(Debug, Default)]
struct ConsoleView {
    failed: bool,
}

impl UsersView for ConsoleView {
    fn hide_add(&mut self) {}

    fn show_add(&mut self) {}

    fn show_refreshing(&mut self) {
        eprintln!("Fetching users...");
    }

    fn hide_refreshing(&mut self) {}

    fn init_users(&mut self) {
        // Rows are rendered by the caller through the presenter's accessors
    }

    fn update_users(&mut self, _users: &[User]) {}

    fn show_error(&mut self, message: &str) {
        self.failed = true;
        eprintln!("{}", message);
    }
}

/// One rendered table row.
#[derive(Debug, Default)]
struct ConsoleRow {
    item: Option<UserItem>,
}

impl UserItemHolder for ConsoleRow {
    fn set_data(&mut self, item: UserItem) {
        self.item = Some(item);
    }
}

impl fmt::Display for ConsoleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            Some(item) => {
                let avatar = item.avatar_url().unwrap_or("-");
                write!(
                    f,
                    "{:>5}  {:<24}  {:<28}  {}",
                    item.user().id,
                    item.full_name(),
                    item.email(),
                    avatar
                )
            }
            None => write!(f, "(unbound row)"),
        }
    }
}

async fn run_list(manager: UsersManager) -> bool {
    let mut presenter = UsersListPresenter::new(manager);
    presenter.attach_view(ConsoleView::default());
    presenter.init_users().await;

    for position in 0..presenter.count() {
        let mut row = ConsoleRow::default();
        presenter.bind_user_at(position, &mut row);
        println!("{}", row);
    }

    presenter.detach_view().map(|view| !view.failed).unwrap_or(false)
}

/// Terminal rendering surface for the add/edit screens.
#[derive(Debug, Default)]
struct ConsoleEditView {
    failed: bool,
}

impl EditUserView for ConsoleEditView {
    fn show_saving(&mut self) {
        eprintln!("Saving...");
    }

    fn hide_saving(&mut self) {}

    fn on_saved(&mut self, user: &User) {
        println!(
            "Saved user {}: {} {} <{}>",
            user.id, user.first_name, user.last_name, user.email
        );
    }

    fn show_error(&mut self, message: &str) {
        self.failed = true;
        eprintln!("{}", message);
    }
}

async fn run_add(manager: UsersManager, args: &[String]) -> bool {
    let (first, last, email) = match (args.first(), args.get(1), args.get(2)) {
        (Some(first), Some(last), Some(email)) => (first, last, email),
        _ => {
            print_usage();
            return false;
        }
    };

    let request = CreateUserRequest {
        first_name: first.clone(),
        last_name: last.clone(),
        email: email.clone(),
        avatar_url: args.get(3).cloned().unwrap_or_default(),
    };

    let mut presenter = EditUserPresenter::new(manager, ConsoleEditView::default());
    presenter.create_user(request).await;
    !presenter.view().failed
}

async fn run_update(manager: UsersManager, args: &[String]) -> bool {
    let Some(id) = args.first().and_then(|raw| raw.parse::<i64>().ok()) else {
        print_usage();
        return false;
    };

    let mut request = UpdateUserRequest::default();
    let mut flags = args[1..].chunks_exact(2);
    for pair in &mut flags {
        let value = Some(pair[1].clone());
        match pair[0].as_str() {
            "--first" => request.first_name = value,
            "--last" => request.last_name = value,
            "--email" => request.email = value,
            "--avatar" => request.avatar_url = value,
            other => {
                eprintln!("Unknown flag: {}", other);
                print_usage();
                return false;
            }
        }
    }
    if !flags.remainder().is_empty() {
        print_usage();
        return false;
    }

    let mut presenter = EditUserPresenter::new(manager, ConsoleEditView::default());
    presenter.update_user(id, request).await;
    !presenter.view().failed
}
