use scrolyte::{DocumentLayout, PageComposition, PageSession, SessionOpts, Viewport};

#[derive(serde::Deserialize)]
struct Scene {
    page: PageComposition,
    viewport: Viewport,
    layout: DocumentLayout,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("portfolio.json");
    let scene: Scene = serde_json::from_str(s)?;

    let mut session = PageSession::new(scene.page, SessionOpts::default())?;
    session.mount(scene.viewport, scene.layout, 0.0);

    for tick in 0..=8u32 {
        let scroll = tick as f64 * 400.0;
        let now = tick as f64 / 2.0;
        session.handle_scroll(scroll, now);

        let styles = session.evaluate(now)?;
        let section = session.active_section().unwrap_or("-");
        match styles.style("hero-copy") {
            Some(hero) => println!(
                "scroll {scroll:>6}: section {section:<8} hero-copy y {:+6.1} opacity {:.2}",
                hero.translate.y, hero.opacity
            ),
            None => println!("scroll {scroll:>6}: section {section}"),
        }
    }

    Ok(())
}
