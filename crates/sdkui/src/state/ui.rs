use std::time::Instant;

use sdkui_core::{Intent, SelectionState};

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn error(id: usize, message: String) -> Self {
        Self {
            id,
            message,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, timeout_secs: u64) -> bool {
        self.created_at.elapsed().as_secs() > timeout_secs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Asks before `intent` moves a version from `from` to `to`.
    Confirm {
        intent: Intent,
        from: SelectionState,
        to: SelectionState,
    },
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::Toast;

    #[test]
    fn toast_error_sets_id_and_message() {
        let toast = Toast::error(7, "install failed".to_string());

        assert_eq!(toast.id, 7);
        assert_eq!(toast.message, "install failed");
    }

    #[test]
    fn toast_expires_after_timeout() {
        let mut toast = Toast::error(1, "boom".to_string());
        assert!(!toast.is_expired(5));

        toast.created_at = Instant::now()
            .checked_sub(Duration::from_secs(10))
            .expect("instant should support subtraction");
        assert!(toast.is_expired(5));
    }
}
