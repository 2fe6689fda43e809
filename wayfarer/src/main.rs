//! Wayfarer binary: terminal setup, effect execution, event loop

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wayfarer_core::{EffectContext, EffectRuntime, LoggingMiddleware, StoreWithMiddleware};

use wayfarer::action::Action;
use wayfarer::api::ApiClient;
use wayfarer::components::AppUi;
use wayfarer::effect::Effect;
use wayfarer::filters::PackageFilter;
use wayfarer::reducer::reducer;
use wayfarer::state::{AppState, Screen};
use wayfarer::ticket::render_ticket;

#[derive(Parser, Debug)]
#[command(name = "wayfarer", about = "WanderLux travel agency in the terminal", version)]
struct Args {
    /// Base URL of the WanderLux API
    #[arg(long, env = "WAYFARER_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Pre-select a category filter (repeatable)
    #[arg(long)]
    category: Vec<String>,

    /// Pre-select a region filter
    #[arg(long)]
    region: Option<String>,

    /// Pre-select a sub-category filter
    #[arg(long)]
    sub_category: Option<String>,

    /// Start with a search query applied
    #[arg(long)]
    search: Option<String>,

    /// Directory PDF tickets are written to
    #[arg(long, env = "WAYFARER_TICKET_DIR", default_value = ".")]
    ticket_dir: PathBuf,

    /// Log every dispatched action (requires WAYFARER_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn initial_filter(&self) -> PackageFilter {
        PackageFilter {
            price_ceiling: None,
            categories: self.category.clone(),
            region: self.region.clone(),
            sub_category: self.sub_category.clone(),
            query: self.search.clone().unwrap_or_default(),
        }
    }
}

/// Log to the file named by WAYFARER_LOG; stdout belongs to the TUI.
fn init_tracing(verbose: bool) -> io::Result<()> {
    let Some(path) = std::env::var_os("WAYFARER_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    api: &ApiClient,
    ticket_dir: &Path,
) {
    match effect {
        Effect::FetchPackages => {
            let api = api.clone();
            ctx.tasks().spawn("packages", async move {
                match api.fetch_packages().await {
                    Ok(items) => Action::PackagesDidLoad(items),
                    Err(e) => Action::PackagesDidError(e.to_string()),
                }
            });
        }
        Effect::FetchCategories => {
            let api = api.clone();
            ctx.tasks().spawn("categories", async move {
                match api.fetch_categories().await {
                    Ok(items) => Action::CategoriesDidLoad(items),
                    Err(e) => Action::CategoriesDidError(e.to_string()),
                }
            });
        }
        Effect::FetchBlogs => {
            let api = api.clone();
            ctx.tasks().spawn("blogs", async move {
                match api.fetch_blogs().await {
                    Ok(items) => Action::BlogsDidLoad(items),
                    Err(e) => Action::BlogsDidError(e.to_string()),
                }
            });
        }
        Effect::FetchGallery => {
            let api = api.clone();
            ctx.tasks().spawn("gallery", async move {
                match api.fetch_gallery().await {
                    Ok(items) => Action::GalleryDidLoad(items),
                    Err(e) => Action::GalleryDidError(e.to_string()),
                }
            });
        }
        Effect::FetchBookings => {
            let api = api.clone();
            ctx.tasks().spawn("bookings", async move {
                match api.fetch_bookings().await {
                    Ok(items) => Action::BookingsDidLoad(items),
                    Err(e) => Action::BookingsDidError(e.to_string()),
                }
            });
        }
        Effect::CreateBooking(booking) => {
            let api = api.clone();
            ctx.tasks().spawn("create_booking", async move {
                match api.create_booking(&booking).await {
                    Ok(created) => Action::BookingDidCreate(created),
                    Err(e) => Action::BookingDidError(e.to_string()),
                }
            });
        }
        Effect::SubmitEnquiry(enquiry) => {
            let api = api.clone();
            ctx.tasks().spawn("enquiry", async move {
                match api.submit_enquiry(&enquiry).await {
                    Ok(echoed) => Action::EnquiryDidSubmit(echoed),
                    Err(e) => Action::EnquiryDidError(e.to_string()),
                }
            });
        }
        Effect::SaveTicket(booking) => {
            let dir = ticket_dir.to_path_buf();
            ctx.tasks().spawn("ticket", async move {
                let result =
                    tokio::task::spawn_blocking(move || render_ticket(&booking, &dir)).await;
                match result {
                    Ok(Ok(path)) => Action::TicketDidSave(path),
                    Ok(Err(e)) => Action::TicketDidError(e.to_string()),
                    Err(e) => Action::TicketDidError(e.to_string()),
                }
            });
        }
        Effect::ScheduleNoticeClear => {
            ctx.tasks().debounce(
                "notice",
                Duration::from_secs(3),
                std::future::ready(Action::NoticeExpired),
            );
        }
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let api = ApiClient::new(&args.api_url);
    let state = AppState::new().with_filter(args.initial_filter());
    let middleware = if args.verbose {
        LoggingMiddleware::verbose()
    } else {
        LoggingMiddleware::new()
    };
    let store = StoreWithMiddleware::new(state, reducer, middleware);
    let mut runtime = EffectRuntime::from_store(store);

    // Kick off the initial fetches for the landing screen
    runtime.enqueue(Action::NavGoto(Screen::Packages));

    info!(api_url = %args.api_url, "starting wayfarer");

    let mut terminal = setup_terminal()?;
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = restore_terminal();
        default_hook(panic);
    }));

    let ui = RefCell::new(AppUi::new());
    let ticket_dir = args.ticket_dir.clone();
    let result = runtime
        .run(
            &mut terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().handle_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(effect, ctx, &api, &ticket_dir),
        )
        .await;

    restore_terminal()?;
    result
}
