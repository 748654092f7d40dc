pub mod components;
pub mod page;
pub mod sections;

use std::time::Duration;

use codewave_core::{random_increment, LoaderPhase, LoaderStep, ProgressLoader};
use components::footer::Footer;
use components::loader::Loader;
use components::navbar::Navbar;
use components::toasts::Toasts;
use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use page::Page;
use sections::{About, Contact, Hero, Portfolio, Services, Technologies};

const LOADER_TICK: Duration = Duration::from_millis(200);
const SKIP_AFTER: Duration = Duration::from_millis(1000);
const DISMISS_AFTER: Duration = Duration::from_millis(500);
const SKIP_DISMISS_AFTER: Duration = Duration::from_millis(300);
const PAGE_READY: Duration = Duration::from_millis(3000);

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page = Page::new();
    provide_context(page);

    start_loader(page);
    let _scroll = window_event_listener(ev::scroll, move |_| page.on_scroll());

    view! {
        <Title text="CodeWave" />
        <Loader />
        <div class="min-h-screen bg-slate-950 text-slate-200 selection:bg-blue-500/30 font-sans">
            <Navbar />
            <main>
                <Hero />
                <Services />
                <Portfolio />
                <Technologies />
                <About />
                <Contact />
            </main>
            <Footer />
        </div>
        <Toasts />
    }
}

/// Drive the loading overlay: random ticks, the skip grace period and the
/// page-ready ceiling.
fn start_loader(page: Page) {
    let loader = page.loader;

    let tick = set_interval_with_handle(
        move || {
            let increment = random_increment(&mut rand::thread_rng(), 5, 20);
            let mut step = LoaderStep::Ignored;
            loader.update(|l| step = l.tick(increment));
            if !loader.with_untracked(keeps_ticking) {
                page.stop_loader_tick();
            }
            if step == LoaderStep::Completed {
                schedule_dismiss(page, DISMISS_AFTER);
            }
        },
        LOADER_TICK,
    );
    match tick {
        Ok(handle) => page.set_loader_tick(handle),
        Err(e) => log::error!("loader interval failed: {:?}", e),
    }

    set_timeout(
        move || {
            loader.update(|l| {
                l.enable_skip();
            });
        },
        SKIP_AFTER,
    );

    set_timeout(
        move || {
            page.stop_loader_tick();
            let mut finished = false;
            loader.update(|l| finished = l.force_finish());
            if finished {
                log::debug!("page ready, loader forced to finish");
                page.on_scroll();
            }
        },
        PAGE_READY,
    );
}

/// Progress ticks only matter while the counter is still running.
fn keeps_ticking(loader: &ProgressLoader) -> bool {
    loader.phase() == LoaderPhase::Loading
}

fn schedule_dismiss(page: Page, after: Duration) {
    set_timeout(
        move || {
            let mut dismissed = false;
            page.loader.update(|l| dismissed = l.dismiss());
            if dismissed {
                page.on_scroll();
            }
        },
        after,
    );
}

/// Skip the rest of the loading animation.
pub fn skip_loader(page: Page) {
    let mut step = LoaderStep::Ignored;
    page.loader.update(|l| step = l.skip());
    if step == LoaderStep::Skipped {
        page.stop_loader_tick();
        schedule_dismiss(page, SKIP_DISMISS_AFTER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticking_stops_once_loading_ends() {
        let mut loader = ProgressLoader::new();
        assert!(keeps_ticking(&loader));
        loader.tick(50);
        assert!(keeps_ticking(&loader));
        loader.tick(60);
        assert!(!keeps_ticking(&loader));
    }

    #[test]
    fn test_ticking_stops_after_skip() {
        let mut loader = ProgressLoader::new();
        loader.enable_skip();
        assert_eq!(loader.skip(), LoaderStep::Skipped);
        assert!(!keeps_ticking(&loader));
    }
}
