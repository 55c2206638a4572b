//! Device detection and the layout switch.

use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};
use verdant_client::device::{DeviceClassifier, DeviceState, Environment};
use verdant_client::layout::{LayoutSelector, LayoutVariant};
use verdant_client::StorefrontConfig;

use crate::components::desktop::DesktopLayout;
use crate::components::mobile::MobileLayout;
use crate::state::StoreContext;

/// Reads the live window.
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    fn user_agent(&self) -> String {
        window().navigator().user_agent().unwrap_or_default()
    }

    fn viewport_width(&self) -> u32 {
        window()
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .map(|width| width.max(0.0) as u32)
            .unwrap_or_default()
    }
}

/// Classify the device on mount and on every window resize.
pub fn use_device_detection(breakpoint: u32) -> ReadSignal<DeviceState> {
    let classifier = StoredValue::new(DeviceClassifier::new(breakpoint));
    let (state, set_state) = signal(DeviceState::LOADING);

    let measure = move || {
        let changed = classifier
            .try_update_value(|c| c.measure(&BrowserEnvironment))
            .unwrap_or(false);
        if changed {
            set_state.set(classifier.with_value(DeviceClassifier::state));
        }
    };

    Effect::new(move |_| measure());
    let _ = use_event_listener(use_window(), ev::resize, move |_| measure());

    state
}

/// Current classification, provided by [`DeviceManager`].
pub fn use_device() -> ReadSignal<DeviceState> {
    expect_context::<ReadSignal<DeviceState>>()
}

/// Renders a spinner until the device is classified, then the mobile or
/// desktop layout around `children`. The layout remounts only when the
/// classification flips; under per-layout retention the cart and wishlist
/// are emptied on each flip.
#[component]
pub fn DeviceManager(children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let device = use_device_detection(config.device.mobile_breakpoint_px);
    provide_context(device);

    let stores = StoreContext::new();
    provide_context(stores);

    let selector = StoredValue::new(LayoutSelector::new(config.layout.retention));
    let variant = RwSignal::new(LayoutVariant::Loading);

    Effect::new(move |_| {
        let state = device.get();
        let transition = selector.try_update_value(|selector| selector.apply(&state)).flatten();
        if let Some(transition) = transition {
            if transition.reset_stores {
                stores.reset();
            }
            if transition.remount {
                variant.set(transition.to);
            }
        }
    });

    move || {
        let children = children.clone();
        match variant.get() {
            LayoutVariant::Loading => view! { <LoadingScreen/> }.into_any(),
            LayoutVariant::Mobile => view! { <MobileLayout>{children()}</MobileLayout> }.into_any(),
            LayoutVariant::Desktop => view! { <DesktopLayout>{children()}</DesktopLayout> }.into_any(),
        }
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="spinner-screen" role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}

/// Picks a child by classification; renders nothing while loading.
///
/// `fallback` is used for a device type without its own child.
#[component]
pub fn DeviceContent(
    #[prop(optional, into)] mobile: Option<ViewFn>,
    #[prop(optional, into)] desktop: Option<ViewFn>,
    #[prop(optional, into)] fallback: Option<ViewFn>,
) -> impl IntoView {
    let device = use_device();

    move || {
        let state = device.get();
        if state.is_loading {
            return ().into_any();
        }
        let chosen = if state.is_mobile { &mobile } else { &desktop };
        match chosen.as_ref().or(fallback.as_ref()) {
            Some(child) => child.run(),
            None => ().into_any(),
        }
    }
}
