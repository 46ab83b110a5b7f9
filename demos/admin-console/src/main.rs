//! Interactive text console for the Reelhub catalog.
//!
//! Drives the SDK's screen controllers against a real service: sign
//! in, list and filter series, edit them field by field, view detail
//! pages, and leave feedback. Navigation the guards hand back is
//! printed as the page the web app would go to.
//!
//! Usage: `admin-console [BASE_URL]`, or set `REELHUB_API`.

use std::io::Write as _;

use reelhub::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Console I/O
// ---------------------------------------------------------------------------

struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Prints a prompt and reads one trimmed line. `None` on EOF.
    async fn ask(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        std::io::stdout().flush().ok();
        match self.lines.next_line().await {
            Ok(Some(line)) => Some(line.trim().to_owned()),
            _ => None,
        }
    }
}

/// Prompts for one form field, keeping the current value on an empty
/// answer. `false` on EOF.
async fn prompt_field(
    console: &mut Console,
    label: &str,
    current: &mut String,
) -> bool {
    let Some(line) = console.ask(&format!("  {label} [{current}]: ")).await
    else {
        return false;
    };
    if !line.is_empty() {
        *current = line;
    }
    true
}

fn parse_id(arg: Option<&str>) -> Option<SeriesId> {
    arg.and_then(|raw| raw.parse().ok()).map(SeriesId)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Prints and clears whatever the screens pushed onto the rail.
fn drain_toasts(ctx: &AppContext) {
    for toast in ctx.toasts().active() {
        println!("[{}] {}", toast.kind.glyph(), toast.message);
        ctx.toasts().dismiss(toast.id);
    }
}

fn render_rows(rows: &[&Series]) {
    if rows.is_empty() {
        println!("  (no series)");
        return;
    }
    println!(
        "  {:>4}  {:<28} {:<8} {:<6} {}",
        "id", "name", "country", "lang", "released"
    );
    for s in rows {
        println!(
            "  {:>4}  {:<28} {:<8} {:<6} {}",
            s.series_id.0,
            s.name,
            s.origin_country.as_deref().unwrap_or(""),
            s.language_code.as_deref().unwrap_or(""),
            format_date(s.release_date.as_deref().unwrap_or("")),
        );
    }
}

fn render_detail(screen: &DetailScreen) {
    if !screen.detail_error.is_empty() {
        println!("  {}", screen.detail_error);
    }
    if let Some(detail) = &screen.detail {
        let s = &detail.series;
        println!(
            "  {} — {} {}",
            s.name,
            s.origin_country.as_deref().unwrap_or(""),
            format_date(s.release_date.as_deref().unwrap_or("")),
        );
        println!(
            "  rating {} ({} ratings), maturity {}",
            format_rating(detail.avg_rating),
            detail.rating_count,
            s.maturity_rating.as_deref().unwrap_or("N/A"),
        );
        if let Some(description) = &s.description {
            println!("  {description}");
        }
        if detail.episodes.is_empty() {
            println!("  (no episodes)");
        }
        for ep in &detail.episodes {
            let runtime = ep
                .runtime_minutes
                .map(|m| format!(" ({m} min)"))
                .unwrap_or_default();
            println!("    ep {}: {}{}", ep.episode_number, ep.title, runtime);
        }
    }

    if !screen.feedback_error.is_empty() {
        println!("  {}", screen.feedback_error);
    }
    if let Some(feedback) = &screen.feedback {
        println!(
            "  average rating: {} from {} ratings",
            format_rating(feedback.average_rating),
            feedback.rating_count,
        );
        for item in &feedback.items {
            println!(
                "    {} {}  {}",
                star_bar(f64::from(item.rating)),
                item.account_name.as_deref().unwrap_or("Anonymous"),
                item.feedback_date.as_deref().unwrap_or(""),
            );
            if let Some(text) = &item.feedback_text {
                println!("      {text}");
            }
        }
    }
}

fn print_help() {
    println!("  l              list all series");
    println!("  s <text>       filter the list by name (s alone clears)");
    println!("  n              create a series");
    println!("  e <id>         edit a series");
    println!("  d <id>         delete a series");
    println!("  v <id>         view detail and feedback");
    println!("  f <id> <1-5> [text]   submit feedback");
    println!("  o              sign out and exit");
    println!("  q              quit");
}

// ---------------------------------------------------------------------------
// Flows
// ---------------------------------------------------------------------------

/// Login/signup loop. `false` means the user quit.
async fn sign_in(console: &mut Console, ctx: &AppContext) -> bool {
    if let Some(destination) = ctx
        .guard()
        .redirect_if_authenticated(Destination::Home)
        .redirect_target()
    {
        println!("already signed in (web app would go to {destination})");
        return true;
    }

    loop {
        let Some(choice) =
            console.ask("[l]og in, [s]ign up, or [q]uit: ").await
        else {
            return false;
        };
        match choice.as_str() {
            "l" => {
                let Some(username) = console.ask("username: ").await else {
                    return false;
                };
                let Some(password) = console.ask("password: ").await else {
                    return false;
                };
                match ctx.login(&username, &password).await {
                    Ok(login) => {
                        println!(
                            "signed in as {} with roles {:?}",
                            login.user_id, login.roles
                        );
                        return true;
                    }
                    Err(e) => println!("login failed: {e}"),
                }
            }
            "s" => {
                let Some(email) = console.ask("email: ").await else {
                    return false;
                };
                let Some(username) = console.ask("username: ").await else {
                    return false;
                };
                let Some(password) = console.ask("password: ").await else {
                    return false;
                };
                match ctx.signup(&email, &username, &password).await {
                    Ok(()) => println!("account created — now log in"),
                    Err(e) => println!("signup failed: {e}"),
                }
            }
            "q" => return false,
            _ => println!("l, s, or q"),
        }
    }
}

/// Prompts through every form field, then saves. `false` on EOF.
async fn edit_and_save(
    console: &mut Console,
    ctx: &AppContext,
    screen: &mut AdminScreen,
    id: Option<SeriesId>,
) -> bool {
    match id {
        Some(id) => {
            screen.edit(id).await;
            if !screen.form_error.is_empty() {
                println!("  {}", screen.form_error);
                return true;
            }
        }
        None => screen.reset(),
    }

    let form = &mut screen.form;
    for (label, field) in [
        ("name", &mut form.name),
        ("language code", &mut form.language_code),
        ("origin country", &mut form.origin_country),
        ("release date (YYYY-MM-DD)", &mut form.release_date),
        ("episodes", &mut form.num_episodes),
        ("description", &mut form.description),
        ("maturity rating", &mut form.maturity_rating),
        ("poster url", &mut form.poster_url),
        ("banner url", &mut form.banner_url),
    ] {
        if !prompt_field(console, label, field).await {
            return false;
        }
    }

    screen.save().await;
    if screen.form_error.is_empty() {
        drain_toasts(ctx);
    } else {
        println!("  {}", screen.form_error);
    }
    true
}

async fn submit_feedback(
    ctx: &AppContext,
    id: SeriesId,
    rating: &str,
    text: &str,
) {
    let mut screen = match DetailScreen::open(ctx.clone(), id).await {
        Ok(screen) => screen,
        Err(destination) => {
            println!("sign in first (web app would go to {destination})");
            return;
        }
    };
    screen.form.rating = rating.to_owned();
    screen.form.text = text.to_owned();
    screen.submit_feedback().await;

    if screen.form_error.is_empty() {
        drain_toasts(ctx);
        if let Some(feedback) = &screen.feedback {
            println!(
                "  average is now {} from {} ratings",
                format_rating(feedback.average_rating),
                feedback.rating_count,
            );
        }
    } else {
        println!("  {}", screen.form_error);
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("REELHUB_API").ok())
        .unwrap_or_else(|| "http://localhost:8000".to_string());

    let ctx = AppContext::builder().base_url(&base_url).build()?;
    tracing::info!(base_url, "admin console starting");
    println!("reelhub admin console — {base_url}");

    let mut console = Console::new();
    if !sign_in(&mut console, &ctx).await {
        return Ok(());
    }

    let mut screen = match AdminScreen::open(ctx.clone()).await {
        Ok(screen) => screen,
        Err(destination) => {
            println!(
                "this console needs an admin account \
                 (web app would go to {destination})"
            );
            return Ok(());
        }
    };
    if !screen.list_error.is_empty() {
        println!("  {}", screen.list_error);
    }
    render_rows(&screen.visible());
    print_help();

    loop {
        let Some(line) = console.ask("> ").await else {
            break;
        };
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let arg = parts.next();

        match command {
            "" => {}
            "h" | "help" => print_help(),
            "l" => {
                screen.refresh().await;
                if !screen.list_error.is_empty() {
                    println!("  {}", screen.list_error);
                }
                render_rows(&screen.visible());
            }
            "s" => {
                screen.set_filter(arg.unwrap_or(""));
                render_rows(&screen.visible());
            }
            "n" => {
                if !edit_and_save(&mut console, &ctx, &mut screen, None).await
                {
                    break;
                }
            }
            "e" => match parse_id(arg) {
                Some(id) => {
                    if !edit_and_save(
                        &mut console,
                        &ctx,
                        &mut screen,
                        Some(id),
                    )
                    .await
                    {
                        break;
                    }
                }
                None => println!("usage: e <id>"),
            },
            "d" => match parse_id(arg) {
                Some(id) => {
                    screen.delete(id).await;
                    if screen.form_error.is_empty() {
                        drain_toasts(&ctx);
                        render_rows(&screen.visible());
                    } else {
                        println!("  {}", screen.form_error);
                    }
                }
                None => println!("usage: d <id>"),
            },
            "v" => match parse_id(arg) {
                Some(id) => {
                    match DetailScreen::open(ctx.clone(), id).await {
                        Ok(detail) => render_detail(&detail),
                        Err(destination) => println!(
                            "sign in first (web app would go to {destination})"
                        ),
                    }
                }
                None => println!("usage: v <id>"),
            },
            "f" => {
                let rating = parts.next();
                match (parse_id(arg), rating) {
                    (Some(id), Some(rating)) => {
                        let text: Vec<&str> = parts.collect();
                        submit_feedback(&ctx, id, rating, &text.join(" "))
                            .await;
                    }
                    _ => println!("usage: f <id> <1-5> [text]"),
                }
            }
            "o" => {
                let destination = ctx.logout()?;
                println!("signed out (web app would go to {destination})");
                break;
            }
            "q" => break,
            other => println!("unknown command '{other}' — h for help"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some("42")), Some(SeriesId(42)));
        assert_eq!(parse_id(Some("nope")), None);
        assert_eq!(parse_id(None), None);
    }
}
