//! Marketing copy rendered by the landing page. Build-time constants only.

pub const PRODUCT_NAME: &str = "TradingAI";
pub const HERO_TITLE: &str = "AI-Powered Candlestick Pattern Recognition";
pub const HERO_SUBTITLE: &str =
    "Harness the power of artificial intelligence to identify trading patterns with unprecedented accuracy.";
pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?auto=format&fit=crop&w=2000&q=80";

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "📈",
        title: "Pattern Recognition",
        body: "Advanced AI algorithms identify complex candlestick patterns in real-time with high accuracy.",
    },
    Feature {
        icon: "🤖",
        title: "Custom Models",
        body: "Tailored AI models trained on your specific trading strategies and preferences.",
    },
    Feature {
        icon: "⚡",
        title: "Real-time Analysis",
        body: "Instant pattern detection and alerts across multiple timeframes and markets.",
    },
];

pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        title: "Connect Your Charts",
        body: "Point TradingAI at the markets and timeframes you already trade.",
    },
    Step {
        title: "Train on Your Strategy",
        body: "Label the setups you care about and let the model learn what a good entry looks like to you.",
    },
    Step {
        title: "Get Alerted",
        body: "Receive a signal the moment a matching pattern forms, with the chart context attached.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "It spots engulfing patterns on the 15 minute chart before I've finished my coffee.",
        author: "Maya R.",
        role: "Day trader",
    },
    Testimonial {
        quote: "The custom model picked up the flag setups I trade without me writing a single rule.",
        author: "Daniel K.",
        role: "Swing trader",
    },
];

pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub perks: &'static [&'static str],
    pub highlighted: bool,
}

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "$29",
        period: "/month",
        perks: &["5 markets", "Daily and weekly intervals", "Email alerts"],
        highlighted: false,
    },
    PricingTier {
        name: "Pro",
        price: "$99",
        period: "/month",
        perks: &["Unlimited markets", "Intervals down to 1 minute", "Real-time alerts", "One custom model"],
        highlighted: true,
    },
    PricingTier {
        name: "Desk",
        price: "Custom",
        period: "",
        perks: &["Team seats", "Unlimited custom models", "Dedicated support"],
        highlighted: false,
    },
];

pub enum FaqBlock {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
}

pub enum FaqAnswer {
    Text(&'static str),
    Rich(&'static [FaqBlock]),
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: FaqAnswer,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Which candlestick patterns can it recognise?",
        answer: FaqAnswer::Rich(&[
            FaqBlock::Paragraph("Out of the box the model covers the classic reversal and continuation patterns:"),
            FaqBlock::Bullets(&["Engulfing and harami", "Hammers, shooting stars and dojis", "Morning and evening stars", "Three soldiers and three crows"]),
            FaqBlock::Paragraph("Custom models can learn any setup you can label."),
        ]),
    },
    FaqEntry {
        question: "Which timeframes are supported?",
        answer: FaqAnswer::Text("Anything from 1 minute candles up to weekly ones."),
    },
    FaqEntry {
        question: "Do you place trades for me?",
        answer: FaqAnswer::Text("No. TradingAI only detects patterns and sends alerts. Execution stays with you and your broker."),
    },
    FaqEntry {
        question: "When can I get access?",
        answer: FaqAnswer::Text("We are onboarding early-access users in batches. Leave your email above and we'll reach out."),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_content() {
        assert!(!FEATURES.is_empty());
        assert!(!STEPS.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert!(!FAQ.is_empty());
        assert_eq!(PRICING.iter().filter(|tier| tier.highlighted).count(), 1);
    }
}
