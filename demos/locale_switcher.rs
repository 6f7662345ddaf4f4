//! Locale store example with a fake localization runtime

use flick::{AppContext, Locale};
use std::sync::{Arc, Mutex};

fn main() {
    println!("=== Locale Switcher Example ===\n");

    // Stand-in for the localization runtime the real app syncs with.
    let runtime_locale = Arc::new(Mutex::new(Locale::Es));

    let runtime = Arc::clone(&runtime_locale);
    let ctx = AppContext::new(move |locale| {
        *runtime.lock().unwrap() = locale;
    });

    // A view subscribing to language changes. Replayed immediately with
    // the current language.
    let subscription = ctx.locale().subscribe(|locale| {
        println!("View renders in: {locale}");
    });

    // The negotiation middleware decides the request locale from a tag.
    let negotiated: Locale = "ca".parse().expect("supported tag");
    println!("\nMiddleware negotiated `{negotiated}`...");
    ctx.set_request_locale(negotiated);

    // The user flips the language from the settings menu.
    println!("\nUser picks English...");
    ctx.locale().set(Locale::En);

    println!(
        "\nLocalization runtime now at: {}",
        runtime_locale.lock().unwrap()
    );

    // Unsupported tags never reach the store.
    match "fr".parse::<Locale>() {
        Ok(_) => unreachable!(),
        Err(err) => println!("Rejected at the boundary: {err}"),
    }

    drop(subscription);
}
