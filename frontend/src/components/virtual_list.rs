use leptos::*;
use std::hash::Hash;

/// Lists longer than this are windowed.
pub const VIRTUALIZE_THRESHOLD: usize = 25;
pub const VIEWPORT_HEIGHT: f64 = 520.0;
pub const ROW_HEIGHT: f64 = 120.0;
pub const OVERSCAN: usize = 3;

pub fn should_virtualize(len: usize) -> bool {
    len > VIRTUALIZE_THRESHOLD
}

/// Half-open row range `[start, end)` to mount, plus the spacer geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleWindow {
    pub start: usize,
    pub end: usize,
    pub offset_top: f64,
    pub total_height: f64,
}

pub fn visible_window(
    scroll_top: f64,
    viewport: f64,
    row_height: f64,
    total: usize,
    overscan: usize,
) -> VisibleWindow {
    if total == 0 || row_height <= 0.0 {
        return VisibleWindow {
            start: 0,
            end: 0,
            offset_top: 0.0,
            total_height: 0.0,
        };
    }
    let first = (scroll_top.max(0.0) / row_height).floor() as usize;
    let visible = (viewport.max(0.0) / row_height).ceil() as usize;
    let start = first.saturating_sub(overscan).min(total);
    let end = first
        .saturating_add(visible)
        .saturating_add(overscan)
        .min(total);
    VisibleWindow {
        start,
        end,
        offset_top: start as f64 * row_height,
        total_height: total as f64 * row_height,
    }
}

#[component]
pub fn VirtualList<T, K, KF, N, NF>(
    #[prop(into)] items: Signal<Vec<T>>,
    key: KF,
    row: NF,
    #[prop(optional)] viewport_height: Option<f64>,
    #[prop(optional)] row_height: Option<f64>,
) -> impl IntoView
where
    T: Clone + 'static,
    K: Eq + Hash + 'static,
    KF: Fn(&T) -> K + 'static,
    N: IntoView + 'static,
    NF: Fn(T) -> N + 'static,
{
    let viewport = viewport_height.unwrap_or(VIEWPORT_HEIGHT);
    let row_height = row_height.unwrap_or(ROW_HEIGHT);
    let scroll_top = create_rw_signal(0.0_f64);
    let window = create_memo(move |_| {
        visible_window(
            scroll_top.get(),
            viewport,
            row_height,
            items.with(Vec::len),
            OVERSCAN,
        )
    });
    let visible_rows = move || {
        let w = window.get();
        items.with(|all| {
            all.iter()
                .skip(w.start)
                .take(w.end.saturating_sub(w.start))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            class="overflow-y-auto"
            style=format!("height: {}px;", viewport)
            on:scroll=move |ev| {
                let target = event_target::<web_sys::Element>(&ev);
                scroll_top.set(target.scroll_top() as f64);
            }
        >
            <div style=move || format!("height: {}px; position: relative;", window.get().total_height)>
                <ul
                    class="divide-y divide-border"
                    style=move || format!("transform: translateY({}px);", window.get().offset_top)
                >
                    <For each=visible_rows key=key children=row />
                </ul>
            </div>
        </div>
    }
}
