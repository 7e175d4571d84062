pub mod data;
pub mod deck;
pub mod progress;
pub mod search;
pub mod session;
pub mod storage;

use deck::{AllCards, Card, Continent, Deck, FilterSelection, Mode};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use progress::{Outcome, ProgressEntry, ProgressKind};
use search::SearchBox;
use session::{Phase, Session};
use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const SWIPE_THRESHOLD: f64 = 70.0;
const TAP_SLOP: f64 = 8.0;
const GRADE_HOLD_MS: u32 = 1500;
const SWIPE_HOLD_MS: u32 = 240;
const SWIPE_SETTLE_MS: u32 = 290;
const TOAST_MS: u32 = 900;

#[derive(Clone, PartialEq)]
struct DragState {
    pointer_id: i32,
    start_x: f64,
    current_x: f64,
}

#[derive(PartialEq, Clone)]
enum FetchStatus {
    Idle,
    Loading,
    Error(String),
}

#[derive(Clone, Copy, PartialEq)]
struct Toast {
    message: &'static str,
    class: &'static str,
}

type SharedSession = Rc<RefCell<Option<Session>>>;

#[function_component(App)]
fn app() -> Html {
    let status = use_state(|| FetchStatus::Loading);
    let all_cards = use_state(|| None::<AllCards>);
    // The session lives in a RefCell rather than component state: grading
    // timers fire against whatever the session is at that moment, not the
    // snapshot captured when the timer was armed.
    let session = use_mut_ref(|| None::<Session>);
    let revision = use_state(|| 0u64);
    let mode = use_state(storage::load_mode);
    let filters = use_state(storage::load_filters);
    let search = use_state(SearchBox::default);
    let drag_state = use_state(|| None::<DragState>);
    let settling = use_state(|| false);
    let settings_open = use_state(|| false);
    let toast = use_state(|| None::<Toast>);
    let toast_timer = use_mut_ref(|| None::<Timeout>);
    let card_ref = use_node_ref();

    {
        let status = status.clone();
        let all_cards = all_cards.clone();
        let session = session.clone();
        let revision = revision.clone();
        let initial_filters = (*filters).clone();

        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match data::load_all_cards().await {
                        Ok(all) => {
                            let deck = Deck::filtered(&all, &initial_filters, None);
                            let progress = storage::load_progress();
                            *session.borrow_mut() = Some(Session::new(deck, progress));
                            all_cards.set(Some(all));
                            status.set(FetchStatus::Idle);
                            redraw(&revision);
                        }
                        Err(err) => {
                            log::error!("Could not load the card data: {}", err);
                            status.set(FetchStatus::Error(err.to_string()));
                        }
                    }
                });

                || ()
            },
            (),
        );
    }

    let on_flip = {
        let session = session.clone();
        let revision = revision.clone();
        Callback::from(move |_: ()| {
            let toggled = with_session(&session, |active| active.toggle_reveal());
            if toggled.unwrap_or(false) {
                redraw(&revision);
            }
        })
    };

    let on_grade = {
        let session = session.clone();
        let revision = revision.clone();
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        let settling = settling.clone();
        Callback::from(move |outcome: Outcome| {
            start_grade(
                &session,
                &revision,
                &toast,
                &toast_timer,
                &settling,
                outcome,
                false,
            );
        })
    };

    let on_swipe_grade = {
        let session = session.clone();
        let revision = revision.clone();
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        let settling = settling.clone();
        Callback::from(move |outcome: Outcome| {
            start_grade(
                &session,
                &revision,
                &toast,
                &toast_timer,
                &settling,
                outcome,
                true,
            );
        })
    };

    let on_card_key = {
        let on_flip = on_flip.clone();
        let on_grade = on_grade.clone();
        Callback::from(move |event: KeyboardEvent| match event.key().as_str() {
            " " | "Enter" => {
                event.prevent_default();
                on_flip.emit(());
            }
            "ArrowLeft" => {
                event.prevent_default();
                on_grade.emit(Outcome::Incorrect);
            }
            "ArrowRight" => {
                event.prevent_default();
                on_grade.emit(Outcome::Correct);
            }
            _ => {}
        })
    };

    let on_search_input = {
        let session = session.clone();
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let mut next = (*search).clone();
            {
                let guard = session.borrow();
                let cards = guard
                    .as_ref()
                    .map(|active| active.deck().cards())
                    .unwrap_or(&[]);
                next.set_query(&input.value(), cards);
            }
            search.set(next);
        })
    };

    let on_search_key = {
        let session = session.clone();
        let search = search.clone();
        let revision = revision.clone();
        Callback::from(move |event: KeyboardEvent| match event.key().as_str() {
            "ArrowDown" => {
                event.prevent_default();
                let mut next = (*search).clone();
                next.select_next();
                search.set(next);
            }
            "ArrowUp" => {
                event.prevent_default();
                let mut next = (*search).clone();
                next.select_prev();
                search.set(next);
            }
            "Enter" => {
                event.prevent_default();
                let mut next = (*search).clone();
                let code = next.confirm();
                search.set(next);
                if let Some(code) = code {
                    jump_to(&session, &revision, &code);
                }
            }
            "Escape" => {
                let mut next = (*search).clone();
                next.clear();
                search.set(next);
            }
            _ => {}
        })
    };

    let on_pick_result = {
        let session = session.clone();
        let search = search.clone();
        let revision = revision.clone();
        Callback::from(move |index: usize| {
            let mut next = (*search).clone();
            let code = next.confirm_at(index);
            search.set(next);
            if let Some(code) = code {
                jump_to(&session, &revision, &code);
            }
        })
    };

    let apply_filters = {
        let session = session.clone();
        let all_cards = all_cards.clone();
        let filters = filters.clone();
        let search = search.clone();
        let revision = revision.clone();
        Callback::from(move |selection: FilterSelection| {
            storage::save_filters(&selection);
            if let Some(all) = (*all_cards).as_ref() {
                with_session(&session, |active| active.apply_filter(all, &selection));
            }
            filters.set(selection);
            // Stale results would point into the old deck.
            search.set(SearchBox::default());
            redraw(&revision);
        })
    };

    let on_toggle_continent = {
        let filters = filters.clone();
        let apply_filters = apply_filters.clone();
        Callback::from(move |continent: Continent| {
            let mut next = (*filters).clone();
            next.toggle_continent(continent);
            apply_filters.emit(next);
        })
    };

    let on_toggle_microstates = {
        let filters = filters.clone();
        let apply_filters = apply_filters.clone();
        Callback::from(move |_: ()| {
            let mut next = (*filters).clone();
            next.include_microstates = !next.include_microstates;
            apply_filters.emit(next);
        })
    };

    let on_mode_change = {
        let mode = mode.clone();
        let session = session.clone();
        let revision = revision.clone();
        Callback::from(move |next: Mode| {
            if *mode == next {
                return;
            }
            storage::save_mode(next);
            with_session(&session, |active| active.reset_flip());
            mode.set(next);
            redraw(&revision);
        })
    };

    let on_clear_progress = {
        let session = session.clone();
        let revision = revision.clone();
        Callback::from(move |kind: ProgressKind| {
            with_session(&session, |active| {
                active.clear_progress(kind);
                storage::save_progress(active.progress());
            });
            redraw(&revision);
        })
    };

    let toggle_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: MouseEvent| {
            settings_open.set(!*settings_open);
        })
    };

    let close_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_| {
            if *settings_open {
                settings_open.set(false);
            }
        })
    };

    let board = match &*status {
        FetchStatus::Loading => html! { <p class="board-placeholder">{ "Loading cards…" }</p> },
        FetchStatus::Error(message) => html! {
            <div class="load-error">
                <p>{ "Unable to load the card data." }</p>
                <p class="load-error-detail">{ message }</p>
            </div>
        },
        FetchStatus::Idle => {
            let guard = session.borrow();
            match guard.as_ref() {
                Some(active) => render_board(
                    active,
                    *mode,
                    *settling,
                    &drag_state,
                    &card_ref,
                    &on_flip,
                    &on_grade,
                    &on_swipe_grade,
                    &on_card_key,
                ),
                None => html! { <p class="board-placeholder">{ "Loading cards…" }</p> },
            }
        }
    };

    let settings_markup = {
        let guard = session.borrow();
        render_settings(
            *settings_open,
            *mode,
            &filters,
            guard.as_ref(),
            (*all_cards).as_ref(),
            &close_settings,
            &on_mode_change,
            &on_toggle_continent,
            &on_toggle_microstates,
            &on_clear_progress,
        )
    };

    let toast_markup = match *toast {
        Some(current) => {
            html! { <div class={classes!("toast", "show", current.class)}>{ current.message }</div> }
        }
        None => html! { <div class="toast"></div> },
    };

    html! {
        <div class="app-container">
            <header class="top-bar">
                <h1 class="app-title">{ "GeoLearn" }</h1>
                { render_search(&search, &on_search_input, &on_search_key, &on_pick_result) }
                <button class="settings-button" onclick={toggle_settings} title="Settings">{ "⚙" }</button>
            </header>
            { settings_markup }
            <main class="content">
                { board }
            </main>
            { toast_markup }
        </div>
    }
}

fn redraw(revision: &UseStateHandle<u64>) {
    revision.set(revision.wrapping_add(1));
}

fn with_session<R>(session: &SharedSession, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
    session.borrow_mut().as_mut().map(f)
}

/// Records the outcome immediately (so nothing is lost if the user races
/// ahead), shows feedback, and schedules the advance for when the hold
/// elapses. The advance only happens if the grade's token is still live.
fn start_grade(
    session: &SharedSession,
    revision: &UseStateHandle<u64>,
    toast: &UseStateHandle<Option<Toast>>,
    toast_timer: &Rc<RefCell<Option<Timeout>>>,
    settling: &UseStateHandle<bool>,
    outcome: Outcome,
    via_swipe: bool,
) {
    let token = with_session(session, |active| {
        let token = active.grade(outcome)?;
        storage::save_progress(active.progress());
        Some(token)
    });
    let Some(token) = token.flatten() else {
        return;
    };

    show_toast(
        toast,
        toast_timer,
        match outcome {
            Outcome::Correct => Toast {
                message: "Correct!",
                class: "toast-correct",
            },
            Outcome::Incorrect => Toast {
                message: "Wrong",
                class: "toast-wrong",
            },
        },
    );
    redraw(revision);

    let hold = if via_swipe { SWIPE_HOLD_MS } else { GRADE_HOLD_MS };
    let session = session.clone();
    let revision = revision.clone();
    let settling = settling.clone();
    spawn_local(async move {
        TimeoutFuture::new(hold).await;
        let advanced = with_session(&session, |active| active.finish_grade(token));
        if !advanced.unwrap_or(false) {
            return;
        }
        redraw(&revision);
        if via_swipe {
            settling.set(true);
            TimeoutFuture::new(SWIPE_SETTLE_MS).await;
            settling.set(false);
        }
    });
}

fn show_toast(
    toast: &UseStateHandle<Option<Toast>>,
    toast_timer: &Rc<RefCell<Option<Timeout>>>,
    next: Toast,
) {
    toast.set(Some(next));
    let clear = {
        let toast = toast.clone();
        Timeout::new(TOAST_MS, move || toast.set(None))
    };
    // Dropping the previous handle cancels it, so back-to-back toasts each
    // get their full display time.
    *toast_timer.borrow_mut() = Some(clear);
}

/// A jump to a code outside the current deck is silently ignored.
fn jump_to(session: &SharedSession, revision: &UseStateHandle<u64>, code: &str) {
    let jumped = with_session(session, |active| active.jump(code));
    if jumped.unwrap_or(false) {
        redraw(revision);
    }
}

fn render_board(
    session: &Session,
    mode: Mode,
    settling: bool,
    drag_state: &UseStateHandle<Option<DragState>>,
    card_ref: &NodeRef,
    on_flip: &Callback<()>,
    on_grade: &Callback<Outcome>,
    on_swipe_grade: &Callback<Outcome>,
    on_card_key: &Callback<KeyboardEvent>,
) -> Html {
    let Some(card) = session.current_card() else {
        return html! { <p class="board-placeholder">{ "No cards match the current filters." }</p> };
    };

    let drag_delta = drag_state
        .deref()
        .as_ref()
        .map(|d| d.current_x - d.start_x)
        .unwrap_or(0.0);
    let is_dragging = drag_state.deref().is_some();
    let drag_style = format!(
        "transform: translateX({:.1}px) rotate({:.2}deg); transition: {};",
        drag_delta,
        drag_delta * 0.02,
        if is_dragging {
            "transform 0s"
        } else {
            "transform 0.25s ease"
        }
    );

    let flash_class = match session.grading_outcome() {
        Some(Outcome::Correct) => Some("correct-flash"),
        Some(Outcome::Incorrect) => Some("wrong-flash"),
        None => None,
    };
    let card_classes = classes!(
        "quiz-card",
        flash_class,
        if settling { Some("settling") } else { None },
    );
    let inner_classes = classes!(
        "card-inner",
        if session.flipped() { Some("flipped") } else { None },
    );

    let pointer_down = {
        let drag_state = drag_state.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            event.prevent_default();
            if drag_state.deref().is_some() {
                return;
            }
            if let Some(element) = card_ref.cast::<web_sys::HtmlElement>() {
                let _ = element.focus();
                let _ = element.set_pointer_capture(event.pointer_id());
            }
            drag_state.set(Some(DragState {
                pointer_id: event.pointer_id(),
                start_x: event.client_x() as f64,
                current_x: event.client_x() as f64,
            }));
        })
    };

    let pointer_move = {
        let drag_state = drag_state.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            if let Some(mut state) = drag_state.deref().clone() {
                if state.pointer_id == event.pointer_id() {
                    event.prevent_default();
                    state.current_x = event.client_x() as f64;
                    drag_state.set(Some(state));
                }
            }
        })
    };

    let pointer_end = {
        let drag_state = drag_state.clone();
        let card_ref = card_ref.clone();
        let on_flip = on_flip.clone();
        let on_swipe_grade = on_swipe_grade.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            if let Some(state) = drag_state.deref().clone() {
                if state.pointer_id == event.pointer_id() {
                    if let Some(element) = card_ref.cast::<web_sys::HtmlElement>() {
                        let _ = element.release_pointer_capture(event.pointer_id());
                    }
                    let delta = state.current_x - state.start_x;
                    if delta.abs() > SWIPE_THRESHOLD {
                        let outcome = if delta > 0.0 {
                            Outcome::Correct
                        } else {
                            Outcome::Incorrect
                        };
                        on_swipe_grade.emit(outcome);
                    } else if delta.abs() < TAP_SLOP {
                        on_flip.emit(());
                    }
                    drag_state.set(None);
                }
            }
        })
    };

    let pointer_cancel = {
        let drag_state = drag_state.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            if let Some(state) = drag_state.deref().clone() {
                if state.pointer_id == event.pointer_id() {
                    if let Some(element) = card_ref.cast::<web_sys::HtmlElement>() {
                        let _ = element.release_pointer_capture(event.pointer_id());
                    }
                    drag_state.set(None);
                }
            }
        })
    };

    let controls_enabled = matches!(session.phase(), Phase::Hidden | Phase::Revealed);
    let flip_click = {
        let on_flip = on_flip.clone();
        Callback::from(move |_: MouseEvent| on_flip.emit(()))
    };
    let wrong_click = {
        let on_grade = on_grade.clone();
        Callback::from(move |_: MouseEvent| on_grade.emit(Outcome::Incorrect))
    };
    let right_click = {
        let on_grade = on_grade.clone();
        Callback::from(move |_: MouseEvent| on_grade.emit(Outcome::Correct))
    };

    html! {
        <div class="board">
            <div
                ref={card_ref.clone()}
                class={card_classes}
                style={drag_style}
                tabindex="0"
                onpointerdown={pointer_down}
                onpointermove={pointer_move}
                onpointerup={pointer_end}
                onpointercancel={pointer_cancel}
                onkeydown={on_card_key.clone()}
            >
                <div class={inner_classes}>
                    <div class="card-face card-front">{ render_front(card, mode) }</div>
                    <div class="card-face card-back">{ render_back(card, mode) }</div>
                </div>
            </div>
            <div class="controls">
                <button class="grade-button wrong" onclick={wrong_click} disabled={!controls_enabled}>
                    { "✗ Wrong" }
                </button>
                <button class="flip-button" onclick={flip_click} disabled={!controls_enabled}>
                    { "Flip" }
                </button>
                <button class="grade-button right" onclick={right_click} disabled={!controls_enabled}>
                    { "✓ Right" }
                </button>
            </div>
            <div class="status-row">
                <span class="deck-progress">
                    { format!("{} / {}", session.cursor() + 1, session.deck().len()) }
                </span>
                <span class="score">
                    { format!("✅ {} · ❌ {}", session.progress().known_count(), session.progress().missed_count()) }
                </span>
                <span class="mode-label">{ format!("Mode: {}", mode.label()) }</span>
            </div>
        </div>
    }
}

fn render_front(card: &Card, mode: Mode) -> Html {
    match mode {
        Mode::Outlines => html! {
            <>
                <div class="visual">
                    <img src={card.shape_path.clone()} alt="Country outline" />
                </div>
                <p class="label">{ "Tap to reveal" }</p>
            </>
        },
        Mode::Flags => html! {
            <>
                <div class="visual">
                    <img class="flag-img" src={card.flag_path.clone()} alt="Country flag" loading="lazy" />
                </div>
                <p class="label">{ "Tap to reveal" }</p>
            </>
        },
        Mode::Capitals => html! {
            <>
                <div class="visual"></div>
                <p class="label">
                    { card.capital.clone().unwrap_or_else(|| "Unknown capital".to_string()) }
                </p>
                <p class="sub">{ "Tap to reveal country" }</p>
            </>
        },
    }
}

fn render_back(card: &Card, mode: Mode) -> Html {
    match mode {
        Mode::Outlines => html! {
            <>
                <div class="visual">
                    <img src={card.shape_path.clone()} alt="Country outline" />
                </div>
                <p class="label">{ &card.name }</p>
            </>
        },
        Mode::Flags => html! {
            <>
                <div class="visual">
                    <img class="flag-img" src={card.flag_path.clone()} alt={format!("Flag of {}", card.name)} loading="lazy" />
                </div>
                <p class="label">{ &card.name }</p>
            </>
        },
        Mode::Capitals => html! {
            <>
                <div class="visual"></div>
                <p class="label">{ &card.name }</p>
                <p class="sub">
                    { format!("Capital: {}", card.capital.as_deref().unwrap_or("Unknown")) }
                </p>
            </>
        },
    }
}

fn render_search(
    search: &SearchBox,
    on_input: &Callback<InputEvent>,
    on_key: &Callback<KeyboardEvent>,
    on_pick: &Callback<usize>,
) -> Html {
    let results = search.results().iter().enumerate().map(|(index, card)| {
        let class = if index == search.selected() {
            "search-result active"
        } else {
            "search-result"
        };
        let on_click = {
            let on_pick = on_pick.clone();
            Callback::from(move |_: MouseEvent| on_pick.emit(index))
        };
        html! {
            <li key={card.code.clone()}>
                <button class={class} onclick={on_click}>
                    <span class="result-icon">{ &card.icon }</span>
                    <span class="result-name">{ &card.name }</span>
                    <span class="result-code">{ &card.code }</span>
                </button>
            </li>
        }
    });

    html! {
        <div class="search-box">
            <input
                type="search"
                placeholder="Jump to a country…"
                value={search.query().to_string()}
                oninput={on_input.clone()}
                onkeydown={on_key.clone()}
            />
            {
                if search.is_open() {
                    html! { <ul class="search-results">{ for results }</ul> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_settings(
    open: bool,
    mode: Mode,
    filters: &FilterSelection,
    session: Option<&Session>,
    all_cards: Option<&AllCards>,
    on_close: &Callback<()>,
    on_mode_change: &Callback<Mode>,
    on_toggle_continent: &Callback<Continent>,
    on_toggle_microstates: &Callback<()>,
    on_clear_progress: &Callback<ProgressKind>,
) -> Html {
    let overlay_classes = classes!("settings-overlay", if open { Some("open") } else { None });
    let panel_classes = classes!("settings-panel", if open { Some("open") } else { None });
    let stop_click = Callback::from(|event: MouseEvent| event.stop_propagation());
    let close_click = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let mode_options = Mode::ALL.into_iter().map(|option| {
        let on_change = {
            let on_mode_change = on_mode_change.clone();
            Callback::from(move |_: Event| on_mode_change.emit(option))
        };
        html! {
            <label class="settings-option">
                <input type="radio" name="mode" checked={mode == option} onchange={on_change} />
                <span>{ option.label() }</span>
            </label>
        }
    });

    let continent_options = Continent::ALL.into_iter().map(|continent| {
        let on_change = {
            let on_toggle_continent = on_toggle_continent.clone();
            Callback::from(move |_: Event| on_toggle_continent.emit(continent))
        };
        html! {
            <label class="settings-option">
                <input
                    type="checkbox"
                    checked={filters.continents.contains(&continent)}
                    onchange={on_change}
                />
                <span>{ continent.name() }</span>
            </label>
        }
    });

    let microstate_change = {
        let on_toggle_microstates = on_toggle_microstates.clone();
        Callback::from(move |_: Event| on_toggle_microstates.emit(()))
    };

    let progress_section = match (session, all_cards) {
        (Some(active), Some(all)) => {
            let known = active.progress().snapshot(ProgressKind::Known, all);
            let missed = active.progress().snapshot(ProgressKind::Missed, all);
            html! {
                <>
                    { render_progress_list("Known", ProgressKind::Known, &known, on_clear_progress) }
                    { render_progress_list("Missed", ProgressKind::Missed, &missed, on_clear_progress) }
                </>
            }
        }
        _ => html! {
            <p class="settings-placeholder">{ "Progress appears once the cards are loaded." }</p>
        },
    };

    html! {
        <div class={overlay_classes} onclick={close_click.clone()}>
            <aside class={panel_classes} onclick={stop_click}>
                <div class="settings-header">
                    <h2>{ "Settings" }</h2>
                    <button class="settings-close" onclick={close_click}>{ "×" }</button>
                </div>

                <div class="settings-section">
                    <h3>{ "Mode" }</h3>
                    <div class="settings-options">{ for mode_options }</div>
                </div>

                <div class="settings-section">
                    <h3>{ "Continents" }</h3>
                    <div class="settings-options">{ for continent_options }</div>
                </div>

                <div class="settings-section">
                    <label class="settings-option">
                        <input
                            type="checkbox"
                            checked={filters.include_microstates}
                            onchange={microstate_change}
                        />
                        <span>{ "Include microstates" }</span>
                    </label>
                </div>

                { progress_section }
            </aside>
        </div>
    }
}

fn render_progress_list(
    title: &str,
    kind: ProgressKind,
    entries: &[ProgressEntry],
    on_clear: &Callback<ProgressKind>,
) -> Html {
    let clear_click = {
        let on_clear = on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(kind))
    };

    let body = if entries.is_empty() {
        html! { <p class="settings-placeholder">{ "Nothing here yet." }</p> }
    } else {
        html! {
            <ul class="progress-list">
                { for entries.iter().map(|entry| html! {
                    <li key={entry.code.clone()}>
                        <span class="entry-icon">{ &entry.icon }</span>
                        <span class="entry-name">{ &entry.name }</span>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="settings-section">
            <div class="settings-section-header">
                <h3>{ format!("{} ({})", title, entries.len()) }</h3>
                <button class="clear-button" onclick={clear_click}>{ "Clear" }</button>
            </div>
            { body }
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
