//! CardStyler — demo binary.
//!
//! Walks the settings → resolve → stylesheet flow against a temp config file
//! and prints what the host would see at each step.

use cardstyler::app::App;
use cardstyler::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use cardstyler::services::style_engine::{resolve, ClassList};
use cardstyler::services::style_sheet::StyleSheet;
use cardstyler::types::embed::EmbedKind;
use cardstyler::types::settings::StylerSettings;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to install tracing subscriber");
    }

    println!("CardStyler v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    demo_settings();
    demo_resolver();
    demo_app();
}

fn section(name: &str) {
    println!("── {} ──", name);
}

fn demo_settings() {
    section("Settings Engine");

    let path = std::env::temp_dir()
        .join("cardstyler-demo.json")
        .to_string_lossy()
        .to_string();
    let mut engine = SettingsEngine::new(Some(path));
    let settings = engine.load().unwrap_or_default();
    println!(
        "  defaults: enabled={}, applyAllEmbed={}, targets={:?}",
        settings.enabled,
        settings.apply_all_embed,
        settings.targets.iter().map(|k| k.id()).collect::<Vec<_>>()
    );

    engine.set_target_selected(EmbedKind::Markdown, true);
    if let Err(e) = engine.save() {
        println!("  save failed (state kept in memory): {}", e);
    }
    println!("  after selecting Markdown: {:?}", engine.get_settings().targets);
    println!();
}

fn demo_resolver() {
    section("Style Resolver");

    let mut settings = StylerSettings::default();
    println!("  explicit subset  -> {:?}", resolve(&settings));

    settings.apply_all_embed = true;
    println!("  apply-to-all     -> {:?}", resolve(&settings));

    settings.enabled = false;
    println!("  feature disabled -> {:?}", resolve(&settings));
    println!();
}

fn demo_app() {
    section("App Core");

    let path = std::env::temp_dir()
        .join("cardstyler-demo-app.json")
        .to_string_lossy()
        .to_string();
    let mut app = App::new(Some(path), ClassList::new());
    app.startup();
    println!("  active after startup: {:?}", app.sink().active());

    app.set_apply_to_all(true);
    println!("  active after apply-to-all: {:?}", app.sink().active());
    for field in app.panel().fields() {
        println!(
            "    field {:<8} enabled={} visible={}",
            field.label(),
            field.enabled,
            field.visible
        );
    }

    app.set_apply_to_all(false);
    println!("  active after restore: {:?}", app.sink().active());
    app.shutdown();

    // Same flow, rendered as CSS text.
    let path = std::env::temp_dir()
        .join("cardstyler-demo-css.json")
        .to_string_lossy()
        .to_string();
    let mut app = App::new(Some(path), StyleSheet::new());
    app.startup();
    println!(
        "  stylesheet `#{}` holds {} bytes of rules",
        app.sink().element_id(),
        app.sink().css().len()
    );
    app.shutdown();
    println!("  stylesheet empty after shutdown: {}", app.sink().is_empty());
}
