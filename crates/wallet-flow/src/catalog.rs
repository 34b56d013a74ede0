//! Sample Data
//!
//! Hardcoded records shown by the screens. Nothing is computed from them;
//! amounts are display strings.

use serde::Serialize;

/// Icon reference. Screens map these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Coin,
    Send,
    Add,
    Deposit,
    Transfer,
    Withdraw,
    Activity,
    Bank,
    Aeroplane,
    Food,
    Subscriptions,
    Bills,
    Shopping,
    LendMoney,
    ArrowUp,
    ArrowDown,
    Back,
    More,
    ChevronDown,
}

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::Coin => "🪙",
            Icon::Send => "➤",
            Icon::Add => "+",
            Icon::Deposit => "⤓",
            Icon::Transfer => "⇄",
            Icon::Withdraw => "⤒",
            Icon::Activity => "▤",
            Icon::Bank => "🏦",
            Icon::Aeroplane => "✈",
            Icon::Food => "🍽",
            Icon::Subscriptions => "🎬",
            Icon::Bills => "🧾",
            Icon::Shopping => "🛍",
            Icon::LendMoney => "🤝",
            Icon::ArrowUp => "↑",
            Icon::ArrowDown => "↓",
            Icon::Back => "‹",
            Icon::More => "⋯",
            Icon::ChevronDown => "⌄",
        }
    }
}

/// Accent colour family used by cards, tiles and chart bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Green,
    Yellow,
    Dark,
}

impl Tone {
    pub const fn css_class(self) -> &'static str {
        match self {
            Tone::Green => "tone-green",
            Tone::Yellow => "tone-yellow",
            Tone::Dark => "tone-dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: &'static str,
    pub amount: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Sent,
    Payment,
}

impl TransactionKind {
    pub const fn label(self) -> &'static str {
        match self {
            TransactionKind::Sent => "Sent",
            TransactionKind::Payment => "Payment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    pub icon: Icon,
    pub description: &'static str,
    pub kind: TransactionKind,
    pub amount: &'static str,
}

/// A card in the home screen stack. `number`/`holder`/`expiry` are only set
/// on real cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentCard {
    pub brand: &'static str,
    pub tone: Tone,
    pub number: Option<&'static str>,
    pub holder: Option<&'static str>,
    pub expiry: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    /// Fraction of the chart height, 0.0..=1.0
    pub height: f32,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub const fn icon(self) -> Icon {
        match self {
            Trend::Up => Icon::ArrowUp,
            Trend::Down => Icon::ArrowDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryTile {
    pub title: &'static str,
    pub amount: &'static str,
    pub trend: Trend,
    pub tone: Tone,
}

// ========================
// Welcome
// ========================

pub const WELCOME_TITLE: &str = "Welcome to E-wallet";
pub const WELCOME_TAGLINE: &str = "Simple way to manage money transfer and receive quickly.";

// ========================
// Profile setup
// ========================

pub const PROFILE_TITLE: &str = "Set Up Your Profile";
pub const PROFILE_SUBTITLE: &str = "Enter your details to get started with your E-wallet.";
pub const CARD_SECTION_TITLE: &str = "Card Details (Optional)";

// ========================
// Home
// ========================

pub const GREETING: &str = "Hi, YUSUF";
pub const WELCOME_BACK: &str = "Welcome Back!";
pub const TRANSACTIONS_PERIOD: &str = "Today";

/// Back to front: the last card is drawn on top
pub const CARDS: [PaymentCard; 3] = [
    PaymentCard {
        brand: "Add new card",
        tone: Tone::Dark,
        number: None,
        holder: None,
        expiry: None,
    },
    PaymentCard {
        brand: "PayPal",
        tone: Tone::Yellow,
        number: None,
        holder: None,
        expiry: None,
    },
    PaymentCard {
        brand: "VISA",
        tone: Tone::Green,
        number: Some("*** *** ***9743"),
        holder: Some("Yusuf Masood"),
        expiry: Some("02/02"),
    },
];

pub const TRANSACTIONS: [TransactionRecord; 2] = [
    TransactionRecord {
        icon: Icon::Send,
        description: "Salman Khan",
        kind: TransactionKind::Sent,
        amount: "- ₹128.08",
    },
    TransactionRecord {
        icon: Icon::Add,
        description: "Gym",
        kind: TransactionKind::Payment,
        amount: "- ₹30.08",
    },
];

// ========================
// Activity
// ========================

pub const TOTAL_SPENDING: &str = "₹1,376.90";
pub const CHART_PERIOD: &str = "Month";
pub const CATEGORY_FILTER: &str = "Expense";

pub const CHART: [ChartBar; 6] = [
    ChartBar { label: "Feb", height: 0.4, tone: Tone::Green },
    ChartBar { label: "Mar", height: 0.6, tone: Tone::Yellow },
    ChartBar { label: "Apr", height: 0.8, tone: Tone::Green },
    ChartBar { label: "May", height: 0.5, tone: Tone::Yellow },
    ChartBar { label: "Jun", height: 0.7, tone: Tone::Green },
    ChartBar { label: "Jul", height: 0.6, tone: Tone::Yellow },
];

pub const SUMMARY: [SummaryTile; 2] = [
    SummaryTile {
        title: "Income",
        amount: "₹3,607.00",
        trend: Trend::Up,
        tone: Tone::Yellow,
    },
    SummaryTile {
        title: "Expense",
        amount: "₹1,807.00",
        trend: Trend::Down,
        tone: Tone::Green,
    },
];

pub const CATEGORIES: [CategorySummary; 7] = [
    CategorySummary { name: "Investments", amount: "₹3,607.0", icon: Icon::Bank },
    CategorySummary { name: "Travelling", amount: "₹4,207.01", icon: Icon::Aeroplane },
    CategorySummary { name: "Food", amount: "₹1,500.00", icon: Icon::Food },
    CategorySummary { name: "Entertainment", amount: "₹800.00", icon: Icon::Subscriptions },
    CategorySummary { name: "Rent and Bills", amount: "₹2,000.00", icon: Icon::Bills },
    CategorySummary { name: "Shopping", amount: "₹750.00", icon: Icon::Shopping },
    CategorySummary { name: "Money lend", amount: "₹1,200.00", icon: Icon::LendMoney },
];
