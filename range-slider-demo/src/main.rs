//! Replays a scripted pointer, focus and keyboard session against a range
//! slider and logs what the host would render after each step.
//!
//! Run with `RUST_LOG=debug` to also see the controller's own decisions.

use std::sync::Arc;

use parking_lot::Mutex;
use tessera_range_slider::{
    GeometryError, Handle, KeyInput, KeyModifiers, PointerEvent, RangeSliderArgs,
    RangeSliderController, SliderKey, State, TrackLayout,
    px::{Px, PxPosition, PxRect},
};
use tracing::{error, info};

const TRACK: PxRect = PxRect::new(Px(40), Px(0), Px(400), Px(24));
const THUMB_SIZE: Px = Px(24);

enum Step {
    Pointer(PointerEvent),
    Focus(Handle, Option<Handle>),
    Blur,
    Key(KeyInput),
    External(Vec<f32>),
}

fn at(x: i32) -> PxPosition {
    PxPosition::new(Px(x), Px(12))
}

fn script() -> Vec<Step> {
    vec![
        // Press on the start thumb and drag it right, past the stop thumb.
        Step::Pointer(PointerEvent::pressed(at(120)).on_thumb(Handle::Start)),
        Step::Pointer(PointerEvent::moved(at(240))),
        Step::Pointer(PointerEvent::moved(at(420))),
        Step::Pointer(PointerEvent::released(at(420))),
        // Click on the bare track near the stop thumb.
        Step::Pointer(PointerEvent::pressed(at(400))),
        Step::Pointer(PointerEvent::released(at(400))),
        // Keyboard on the focused thumb.
        Step::Key(SliderKey::ArrowLeft.into()),
        Step::Key(KeyInput {
            key: SliderKey::ArrowRight,
            modifiers: KeyModifiers {
                shift: true,
                ctrl: false,
            },
        }),
        Step::Key(SliderKey::End.into()),
        Step::Blur,
        // The host resets the value; both thumbs collapse onto the minimum.
        Step::External(Vec::new()),
        Step::Focus(Handle::Start, None),
        Step::Key(SliderKey::PageUp.into()),
    ]
}

fn main() {
    init_tracing();

    let external = Arc::new(Mutex::new(vec![20.0f32, 80.0]));
    let sink = Arc::clone(&external);
    let args = RangeSliderArgs::default()
        .min(0.0)
        .max(100.0)
        .step(5.0)
        .id("price")
        .name("price_range")
        .on_change(move |pair| {
            info!(?pair, "host value updated");
            *sink.lock() = pair.to_vec();
        });

    let initial = external.lock().clone();
    let controller = match RangeSliderController::new(args, Some(initial.as_slice())) {
        Ok(controller) => controller,
        Err(err) => {
            error!(%err, "invalid slider configuration");
            return;
        }
    };
    let mut layout =
        TrackLayout::new(TRACK, THUMB_SIZE, controller.mapper(), controller.value());
    let state = State::new(controller);

    for step in script() {
        layout = state.with(|c| layout.relayout(c.mapper(), c.value()));
        if let Err(err) = run_step(&state, &layout, step) {
            error!(%err, "host geometry is not ready");
            return;
        }
        state.with(render);
    }

    state.with(|c| {
        for proxy in c.form_proxies() {
            info!(id = %proxy.id, name = %proxy.name, value = proxy.value, "form field");
        }
    });
    info!(value = ?*external.lock(), "final host value");
}

fn run_step(
    state: &State<RangeSliderController>,
    layout: &TrackLayout,
    step: Step,
) -> Result<(), GeometryError> {
    state.with_mut(|c| {
        match step {
            Step::Pointer(event) => {
                let response = c.handle_pointer_event(event, layout)?;
                info!(content = ?event.content, outcome = ?response.outcome, "pointer");
                if let Some(request) = response.focus_request {
                    info!(to = ?request.handle, "host moves focus");
                }
            }
            Step::Focus(handle, related) => {
                if let Some(request) = c.handle_focus(handle, related) {
                    info!(to = ?request.handle, "host moves focus");
                    c.handle_blur();
                    c.handle_focus(request.handle, Some(handle));
                }
            }
            Step::Blur => c.handle_blur(),
            Step::Key(input) => {
                let changed = c.handle_key(input);
                info!(key = ?input.key, changed, "key");
            }
            Step::External(value) => c.sync_external(Some(value.as_slice())),
        }
        Ok(())
    })
}

fn render(c: &RangeSliderController) {
    let [start, stop] = Handle::ALL.map(|handle| c.thumb_view(handle));
    let [fill_start, fill_stop] = c.track_fill();
    info!(
        lo = start.value,
        hi = stop.value,
        fill = %format!("{:.0}%..{:.0}%", fill_start * 100.0, fill_stop * 100.0),
        start_focused = start.focused,
        stop_focused = stop.focused,
        dragging = start.dragging || stop.dragging,
        "render"
    );
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,tessera_range_slider=info,range_slider_demo=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
