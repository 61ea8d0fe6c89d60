//! Badge components for account verification and protection.

use maud::{html, Markup, Render};

use crate::api::Verification;

/// Checkmark path used for verified accounts.
const VERIFIED_ICON_PATH: &str = "M22.5 12.5c0-1.58-.875-2.95-2.148-3.6.154-.435.238-.905.238-1.4 0-2.21-1.71-3.998-3.818-3.998-.47 0-.92.084-1.336.25C14.818 2.415 13.51 1.5 12 1.5s-2.816.917-3.437 2.25c-.415-.165-.866-.25-1.336-.25-2.11 0-3.818 1.79-3.818 4 0 .494.083.964.237 1.4-1.272.65-2.147 2.018-2.147 3.6 0 1.495.782 2.798 1.942 3.486-.02.17-.032.34-.032.514 0 2.21 1.708 4 3.818 4 .47 0 .92-.086 1.335-.25.62 1.334 1.926 2.25 3.437 2.25 1.512 0 2.818-.916 3.437-2.25.415.163.865.248 1.336.248 2.11 0 3.818-1.79 3.818-4 0-.174-.012-.344-.033-.513 1.158-.687 1.943-1.99 1.943-3.484zm-6.616-3.334l-4.334 6.5c-.145.217-.382.334-.625.334-.143 0-.288-.04-.416-.126l-.115-.094-2.415-2.415c-.293-.293-.293-.768 0-1.06s.768-.294 1.06 0l1.77 1.767 3.825-5.74c.23-.345.696-.436 1.04-.207.346.23.44.696.21 1.04z";

/// Lock path used for protected accounts.
const LOCK_ICON_PATH: &str = "M17.5 7H17v-.25c0-2.76-2.24-5-5-5s-5 2.24-5 5V7h-.5C5.12 7 4 8.12 4 9.5v9C4 19.88 5.12 21 6.5 21h11c1.39 0 2.5-1.12 2.5-2.5v-9C20 8.12 18.89 7 17.5 7zM13 14.73V17h-2v-2.27c-.59-.34-1-.99-1-1.73 0-1.1.9-2 2-2 1.11 0 2 .9 2 2 0 .74-.4 1.39-1 1.73zM15 7H9v-.25c0-1.66 1.35-3.08 3-3.08s3 1.42 3 3.08V7z";

/// Verification checkmark. Business and government accounts get the gold
/// variant.
#[derive(Debug, Clone, Copy)]
pub struct VerificationBadge {
    pub gold: bool,
}

impl VerificationBadge {
    #[must_use]
    pub fn from_verification(verification: &Verification) -> Self {
        Self {
            gold: verification.is_gold(),
        }
    }
}

impl Render for VerificationBadge {
    fn render(&self) -> Markup {
        let class = if self.gold {
            "verified-icon gold"
        } else {
            "verified-icon"
        };
        let title = if self.gold {
            "Verified organization"
        } else {
            "Verified account"
        };

        html! {
            span class="badge verification-badge" title=(title) {
                svg class=(class) width="20" height="20" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true" {
                    path d=(VERIFIED_ICON_PATH) {}
                }
            }
        }
    }
}

/// Lock badge for protected accounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtectedBadge;

impl Render for ProtectedBadge {
    fn render(&self) -> Markup {
        html! {
            span class="badge protected-badge" title="Protected account" {
                svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true" {
                    path d=(LOCK_ICON_PATH) {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_for_business() {
        let verification = Verification {
            verified: true,
            kind: "Business".to_string(),
        };
        let html = VerificationBadge::from_verification(&verification)
            .render()
            .into_string();
        assert!(html.contains("verified-icon gold"));
    }

    #[test]
    fn test_plain_for_individual() {
        let verification = Verification {
            verified: true,
            kind: String::new(),
        };
        let html = VerificationBadge::from_verification(&verification)
            .render()
            .into_string();
        assert!(html.contains("class=\"verified-icon\""));
        assert!(!html.contains("gold"));
    }

    #[test]
    fn test_protected_badge() {
        let html = ProtectedBadge.render().into_string();
        assert!(html.contains("protected-badge"));
    }
}
