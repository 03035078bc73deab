//! Background scroll suppression for the detail view.
//!
//! Locking saves the `<body>` overflow value in effect before the view
//! opened and unlocking puts that exact value back. Both are idempotent.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

const LOCKED_OVERFLOW: &str = "hidden";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    saved: Option<String>,
}

/// Read/write access to the page body's `overflow` style.
pub trait BodyOverflow {
    fn overflow(&self) -> String;
    fn set_overflow(&mut self, value: &str);
}

/// The document `<body>`. Outside `csr` reads are empty and writes no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentBody;

impl BodyOverflow for DocumentBody {
    fn overflow(&self) -> String {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
                .and_then(|b| b.style().get_property_value("overflow").ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn set_overflow(&mut self, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let style = body.style();
                let _ = if value.is_empty() {
                    style.remove_property("overflow").map(|_| ())
                } else {
                    style.set_property("overflow", value)
                };
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }
}

impl ScrollLock {
    pub fn is_locked(&self) -> bool {
        self.saved.is_some()
    }

    pub fn lock(&mut self) {
        self.lock_on(&mut DocumentBody);
    }

    pub fn unlock(&mut self) {
        self.unlock_on(&mut DocumentBody);
    }

    pub fn lock_on(&mut self, body: &mut impl BodyOverflow) {
        if self.is_locked() {
            return;
        }
        self.saved = Some(body.overflow());
        body.set_overflow(LOCKED_OVERFLOW);
    }

    pub fn unlock_on(&mut self, body: &mut impl BodyOverflow) {
        if let Some(previous) = self.saved.take() {
            body.set_overflow(&previous);
        }
    }
}
