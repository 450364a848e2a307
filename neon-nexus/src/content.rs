//! Hardcoded site content. Identity is array position only.

use crate::models::{
    BlogPost, LearningFilter, LearningTrack, Metric, PortfolioItem, Testimonial, TrackCategory,
};

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Designing Synesthetic Interfaces for Mixed Reality",
        excerpt: "Harness multi-sensory cues to accelerate comprehension inside immersive control rooms.",
        category: "Experience Design",
        reading_time: "7 min read",
        published: "May 18, 2042",
        url: "#",
    },
    BlogPost {
        title: "Deploying Edge AI for Responsive Brand Worlds",
        excerpt: "Move your experiences closer to the visitor with lightweight inference pipelines and real-time mood mapping.",
        category: "AI Systems",
        reading_time: "9 min read",
        published: "Apr 30, 2042",
        url: "#",
    },
    BlogPost {
        title: "Design Ops for Quantum Product Teams",
        excerpt: "Governance frameworks that keep hybrid teams shipping at light speed.",
        category: "Future of Work",
        reading_time: "6 min read",
        published: "Apr 14, 2042",
        url: "#",
    },
    BlogPost {
        title: "Narrative UX: Crafting Story-driven Onboarding",
        excerpt: "Layer narrative arcs into your onboarding flows to boost adoption and loyalty.",
        category: "Narrative UX",
        reading_time: "5 min read",
        published: "Mar 28, 2042",
        url: "#",
    },
];

pub const LEARNING_TRACKS: &[LearningTrack] = &[
    LearningTrack {
        title: "Spatial Interface Architect",
        description: "Prototype holographic interactions, volumetric layouts, and multisensory cues.",
        category: TrackCategory::Design,
        duration: "6 weeks",
        level: "Intermediate",
    },
    LearningTrack {
        title: "Edge AI Systems for Brand Ops",
        description: "Deploy micro-models that adapt your experiences to live visitor signals.",
        category: TrackCategory::Development,
        duration: "8 weeks",
        level: "Advanced",
    },
    LearningTrack {
        title: "Strategic Foresight Lab",
        description: "Run trend-mapping and scenario planning sprints for future-ready teams.",
        category: TrackCategory::Strategy,
        duration: "4 weeks",
        level: "Beginner",
    },
    LearningTrack {
        title: "Generative Narrative Design",
        description: "Blend GPT-powered story weaving with ethical guardrails.",
        category: TrackCategory::Design,
        duration: "5 weeks",
        level: "Intermediate",
    },
    LearningTrack {
        title: "Autonomous Ops Dashboarding",
        description: "Build decision cockpits using live data streams and predictive automation.",
        category: TrackCategory::Development,
        duration: "6 weeks",
        level: "Advanced",
    },
];

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Heliosverse Immersive Expo",
        summary: "A hybrid expo environment with adaptive narratives, 8K volumetric streaming, and multi-sensory engagement.",
        tags: &["Immersive", "XR", "Event"],
        result: "Increased dwell time by 212% for 60k visitors.",
    },
    PortfolioItem {
        title: "PulseOS Mission Control",
        summary: "Centralized intelligence dashboard orchestrating AI insights, automation triggers, and human override protocols.",
        tags: &["AI Ops", "Analytics", "SaaS"],
        result: "Reduced response times across teams by 48%.",
    },
    PortfolioItem {
        title: "Lumen Labs Brand Universe",
        summary: "Persistent narrative-driven universe spanning web, VR, and physical installations.",
        tags: &["Brand", "Story", "Cross-media"],
        result: "Enabled a 3x increase in loyalty membership conversions.",
    },
    PortfolioItem {
        title: "NovaStack Learning Grid",
        summary: "Adaptive microlearning platform with biometric feedback loops and AI mentors.",
        tags: &["Learning", "Platform", "AI"],
        result: "Achieved a 96% satisfaction rating across 12 enterprise cohorts.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Neon Nexus rebuilt our launch experience in six weeks and our visitors still talk about it.",
        author: "Ari Okafor",
        role: "Head of Experience, Heliosverse",
    },
    Testimonial {
        quote: "The mission control dashboard turned four teams of firefighters into one calm crew.",
        author: "Mina Castellanos",
        role: "VP Operations, PulseOS",
    },
    Testimonial {
        quote: "They speak design, data, and strategy fluently, which is rarer than it should be.",
        author: "Jun Watanabe",
        role: "Chief Brand Officer, Lumen Labs",
    },
];

pub const METRICS: &[Metric] = &[
    Metric {
        id: "launches",
        label: "Experiences launched",
        target: 148,
        suffix: "+",
    },
    Metric {
        id: "visitors",
        label: "Visitors engaged (k)",
        target: 920,
        suffix: "k",
    },
    Metric {
        id: "satisfaction",
        label: "Client satisfaction",
        target: 98,
        suffix: "%",
    },
];

pub fn learning_tracks(filter: LearningFilter) -> Vec<&'static LearningTrack> {
    LEARNING_TRACKS
        .iter()
        .filter(|track| filter.admits(track))
        .collect()
}
