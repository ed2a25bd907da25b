//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use acme_core::content::FeatureIcon;
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuCircleCheck as Check, LuMenu as Menu, LuMoon as Moon,
        LuShield as Shield, LuSparkles as Sparkles, LuStar as Star, LuSun as Sun,
        LuTrendingUp as TrendingUp, LuUsers as Users, LuX as Close, LuZap as Zap,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsCheckCircleFill as Check, BsGraphUpArrow as TrendingUp,
        BsLightningChargeFill as Zap, BsList as Menu, BsMoonFill as Moon,
        BsPeopleFill as Users, BsShieldCheck as Shield, BsStarFill as Star,
        BsStars as Sparkles, BsSunFill as Sun, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(STAR, Star);
themed_icon!(CHECK, Check);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(ZAP, Zap);
themed_icon!(SHIELD, Shield);
themed_icon!(USERS, Users);
themed_icon!(SPARKLES, Sparkles);
themed_icon!(TRENDING_UP, TrendingUp);

/// Glyph for a feature card.
pub fn feature(icon: FeatureIcon) -> Icon {
    match icon {
        FeatureIcon::Zap => ZAP,
        FeatureIcon::Shield => SHIELD,
        FeatureIcon::Users => USERS,
        FeatureIcon::Sparkles => SPARKLES,
        FeatureIcon::TrendingUp => TRENDING_UP,
        FeatureIcon::Star => STAR,
    }
}
