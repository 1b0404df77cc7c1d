//! Leptos Modal Utilities
//!
//! Overlay dialog for Leptos driven by a pair of open/close signals.
//! Closes on overlay click, the close button, or Escape.

use leptos::prelude::*;

/// Open state signals for one modal
#[derive(Clone, Copy)]
pub struct ModalSignals {
    pub is_open_read: ReadSignal<bool>,
    pub is_open_write: WriteSignal<bool>,
}

pub fn create_modal_signals() -> ModalSignals {
    let (is_open_read, is_open_write) = signal(false);
    ModalSignals {
        is_open_read,
        is_open_write,
    }
}

pub fn open_modal(modal: &ModalSignals) {
    modal.is_open_write.set(true);
}

pub fn close_modal(modal: &ModalSignals) {
    modal.is_open_write.set(false);
}

pub fn toggle_modal(modal: &ModalSignals) {
    modal.is_open_write.update(|open| *open = !*open);
}

/// Keys that dismiss an open modal
pub fn closes_modal(key: &str) -> bool {
    key == "Escape"
}

/// Overlay dialog; children render only while open
#[component]
pub fn Modal(
    modal: ModalSignals,
    #[prop(optional, into)] content_class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let handle = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if closes_modal(&ev.key()) && modal.is_open_read.get_untracked() {
            close_modal(&modal);
        }
    });
    on_cleanup(move || handle.remove());

    let content_class = if content_class.is_empty() {
        "modal-content".to_string()
    } else {
        format!("modal-content {content_class}")
    };

    view! {
        <Show when=move || modal.is_open_read.get()>
            <div class="modal-overlay" on:click=move |_| close_modal(&modal)>
                <div
                    class=content_class.clone()
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="modal-close-btn"
                        on:click=move |_| close_modal(&modal)
                    >
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_escape_closes() {
        assert!(closes_modal("Escape"));
        assert!(!closes_modal("Enter"));
        assert!(!closes_modal("escape"));
    }

    #[test]
    fn test_modal_signals_open_close_toggle() {
        let owner = Owner::new();
        owner.with(|| {
            let modal = create_modal_signals();
            assert!(!modal.is_open_read.get_untracked());

            open_modal(&modal);
            assert!(modal.is_open_read.get_untracked());

            toggle_modal(&modal);
            assert!(!modal.is_open_read.get_untracked());

            toggle_modal(&modal);
            close_modal(&modal);
            assert!(!modal.is_open_read.get_untracked());
        });
    }
}
