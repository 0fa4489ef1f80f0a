//! Subcommand handlers. Each one drives the matching view-model.

use std::collections::BTreeSet;
use std::sync::Arc;

use cbol_api_client::models::User;
use cbol_api_client::{ApiClient, ClientConfig};
use cbol_core::forms::PhoneInput;
use cbol_core::route::{Route, guard};
use cbol_core::session::{FileTokenStore, Session};
use cbol_views::login::LoginView;
use cbol_views::my_page::{MyPageView, ProfileForm};
use cbol_views::users::UserManagementView;
use cbol_views::{Outcome, ViewContext, header};

use crate::cli::{Cli, Commands, MeCommand, ProfileArgs, UsersCommand};
use crate::terminal::{LogNotifier, StdinConfirm, TerminalNavigator};
use crate::{Error, Result};

pub async fn dispatch(args: Cli) -> Result<()> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = args.api_url {
        config.base_url = url;
    }
    if let Some(path) = args.session_file {
        config.session_file = path;
    }

    let console = Console::open(&config, args.yes)?;
    match args.command {
        Commands::Login { username, password } => console.login(username, password).await,
        Commands::Logout => console.logout(),
        Commands::Whoami => console.whoami(),
        Commands::Me(cmd) => console.me(cmd).await,
        Commands::Users(cmd) => console.users(cmd).await,
        // Answered before the runtime starts.
        Commands::Version => Ok(()),
    }
}

struct Console {
    ctx: ViewContext,
}

impl Console {
    fn open(config: &ClientConfig, assume_yes: bool) -> Result<Self> {
        log::debug!("session file: {}", config.session_file.display());
        let session = Arc::new(Session::new(FileTokenStore::new(
            config.session_file.clone(),
        ))?);
        let navigator = Arc::new(TerminalNavigator::default());
        let api = ApiClient::new(config, session, navigator.clone())?;
        let ctx = ViewContext::new(
            api,
            navigator,
            Arc::new(LogNotifier),
            Arc::new(StdinConfirm::new(assume_yes)),
        );
        Ok(Self { ctx })
    }

    /// Runs the route guard for `route`.
    fn enter(&self, route: Route) -> Result<()> {
        if guard(self.ctx.session(), route) != route {
            return Err(Error::Custom(format!(
                "{route} requires a session; run `cbol login` first"
            )));
        }
        Ok(())
    }

    async fn login(&self, username: String, password: String) -> Result<()> {
        let mut view = LoginView::new();
        view.username = username;
        view.password = password;
        finish(view.submit(&self.ctx).await)?;

        match header::greeting(self.ctx.session()) {
            Some(greeting) => log::info!("Welcome, {greeting}"),
            None => log::info!("Logged in"),
        }
        Ok(())
    }

    fn logout(&self) -> Result<()> {
        finish(header::logout(&self.ctx))
    }

    fn whoami(&self) -> Result<()> {
        self.enter(Route::Dashboard)?;
        match header::greeting(self.ctx.session()) {
            Some(greeting) => println!("{greeting}"),
            None => println!("(session token has no readable claims)"),
        }
        Ok(())
    }

    async fn me(&self, cmd: MeCommand) -> Result<()> {
        self.enter(Route::MyPage)?;
        match cmd {
            MeCommand::Show { verify } => {
                let mut view = MyPageView::new(verify.is_some());
                match verify {
                    Some(password) => {
                        view.set_verify_password(&password);
                        finish(view.verify(&self.ctx).await)?;
                    }
                    None => finish(view.mount(&self.ctx).await)?,
                }
                if let Some(user) = view.profile() {
                    print_profile(user);
                }
                Ok(())
            }
            MeCommand::Edit(changes) => {
                let mut view = MyPageView::new(false);
                finish(view.mount(&self.ctx).await)?;
                if !view.open_edit_profile() {
                    return Err(Error::Custom("profile is not available".into()));
                }
                if let Some(form) = view.edit_profile_form() {
                    apply_profile_changes(form, changes);
                }
                finish(view.save_profile(&self.ctx).await)
            }
            MeCommand::Password {
                current,
                new,
                confirm,
            } => {
                let mut view = MyPageView::new(false);
                view.open_change_password();
                if let Some(form) = view.change_password_form() {
                    form.current = current;
                    form.new = new;
                    form.confirm = confirm;
                }
                finish(view.change_password(&self.ctx).await)
            }
            MeCommand::Delete => {
                let mut view = MyPageView::new(false);
                finish(view.delete_account(&self.ctx).await)
            }
        }
    }

    async fn users(&self, cmd: UsersCommand) -> Result<()> {
        self.enter(Route::Users)?;
        let mut view = UserManagementView::new();
        finish(view.fetch_users(&self.ctx).await)?;

        match cmd {
            UsersCommand::List => {
                print_user_table(view.users());
                Ok(())
            }
            UsersCommand::Create {
                name,
                english_name,
                username,
                phone,
                role,
                position,
            } => {
                view.open_create();
                if let Some(form) = view.modal_mut() {
                    form.identity.name = name;
                    form.identity.set_english_name(&english_name);
                    form.identity.set_username(&username);
                    form.phone = PhoneInput::parse(&phone);
                    form.role = Some(role);
                    form.position = position;
                }
                finish(view.save_user(&self.ctx).await)
            }
            UsersCommand::Edit {
                username,
                role,
                position,
            } => {
                let id = find_id(&view, &username)?;
                view.open_edit(id);
                if let Some(form) = view.modal_mut() {
                    if role.is_some() {
                        form.role = role;
                    }
                    if position.is_some() {
                        form.position = position;
                    }
                }
                finish(view.save_user(&self.ctx).await)
            }
            UsersCommand::Delete { usernames } => {
                let usernames: BTreeSet<String> = usernames.into_iter().collect();
                for username in &usernames {
                    let id = find_id(&view, username)?;
                    view.toggle_select(id);
                }
                finish(view.delete_selected(&self.ctx).await)
            }
        }
    }
}

fn finish(outcome: Outcome) -> Result<()> {
    if outcome.is_completed() {
        Ok(())
    } else {
        Err(Error::Incomplete(outcome))
    }
}

fn find_id(view: &UserManagementView, username: &str) -> Result<i64> {
    view.users()
        .iter()
        .find(|u| u.username == username)
        .map(|u| u.id)
        .ok_or_else(|| Error::Custom(format!("no such user: {username}")))
}

fn apply_profile_changes(form: &mut ProfileForm, changes: ProfileArgs) {
    if let Some(name) = changes.name {
        form.identity.name = name;
    }
    if let Some(english_name) = changes.english_name {
        form.identity.set_english_name(&english_name);
    }
    if let Some(username) = changes.username {
        form.identity.set_username(&username);
    }
    if let Some(phone) = changes.phone {
        form.phone = PhoneInput::parse(&phone);
    }
}

fn print_profile(user: &User) {
    println!("name:         {}", user.name);
    println!("english name: {}", user.english_name);
    println!("username:     {}", user.username);
    println!("role:         {}", user.role);
    println!("position:     {}", user.position);
    println!("phone:        {}", user.phone_number);
    println!("email:        {}", user.email);
}

fn print_user_table(users: &[User]) {
    println!(
        "{:>5}  {:<16} {:<12} {:<16} {:<6} {:<6} {:<14} {}",
        "ID", "USERNAME", "NAME", "ENGLISH NAME", "ROLE", "RANK", "PHONE", "EMAIL"
    );
    for u in users {
        println!(
            "{:>5}  {:<16} {:<12} {:<16} {:<6} {:<6} {:<14} {}",
            u.id, u.username, u.name, u.english_name, u.role, u.position, u.phone_number, u.email
        );
    }
}
