//! Static seed catalog and identity defaults.
//!
//! This is the configuration data the engine falls back to when the content
//! store has nothing to say: the shipped experiences and projects (used
//! whenever their collection snapshot is empty), the bookable service
//! catalog (never persisted), the default site identity, and the
//! placeholder documents the admin "add" actions create.

use crate::booking::AppointmentService;
use crate::experience::Experience;
use crate::identity::{AboutContent, ContactChannels, SiteIdentity, StatItem};
use crate::project::Project;

// ---------------------------------------------------------------------------
// Experiences
// ---------------------------------------------------------------------------

/// The shipped experience list, newest first.
pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".into(),
            company: "PIXEL PERFECT AGENCY".into(),
            role: "SENIOR MARKETING LEAD".into(),
            period: "2021 - Present".into(),
            logo: "https://cdn-icons-png.flaticon.com/512/3242/3242257.png".into(),
            tasks: vec![
                "Orchestrating multi-channel digital campaigns".into(),
                "Managing $50k+ monthly ad budgets".into(),
                "Scaling e-commerce brands by 300% YoY".into(),
            ],
        },
        Experience {
            id: "2".into(),
            company: "GROWTHX SYSTEMS".into(),
            role: "DIGITAL STRATEGIST".into(),
            period: "2019 - 2021".into(),
            logo: "https://cdn-icons-png.flaticon.com/512/1006/1006544.png".into(),
            tasks: vec![
                "Built automated lead nurturing systems".into(),
                "Reduced CAC by 45% through optimization".into(),
                "Conducted data-driven UX audits".into(),
            ],
        },
        Experience {
            id: "3".into(),
            company: "CREATIVE ORBIT".into(),
            role: "CONTENT COORDINATOR".into(),
            period: "2017 - 2019".into(),
            logo: "https://cdn-icons-png.flaticon.com/512/1155/1155106.png".into(),
            tasks: vec![
                "Produced viral social media content".into(),
                "Managed community engagement of 500k+".into(),
                "Spearheaded brand redesign project".into(),
            ],
        },
    ]
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// The shipped portfolio case studies.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "E-COMMERCE DOMINATION".into(),
            stats: "$120K REVENUE / MO".into(),
            description: "A complete overhaul of an electronics brand.".into(),
            long_description: "Leveraging AI-driven targeting and high-converting funnel \
                               design, we transformed a struggling electronics retailer into \
                               a market leader. The campaign focused on cross-channel \
                               synchronization and retention marketing."
                .into(),
            image: "https://picsum.photos/800/600?random=11".into(),
            gallery: vec![
                "https://picsum.photos/800/600?random=11".into(),
                "https://picsum.photos/800/600?random=111".into(),
                "https://picsum.photos/800/600?random=112".into(),
                "https://picsum.photos/800/600?random=113".into(),
            ],
            tags: vec!["E-COM".into(), "FB ADS".into(), "SEO".into()],
            color: "text-cyan-600".into(),
        },
        Project {
            id: "2".into(),
            title: "THE LEAD MACHINE".into(),
            stats: "3500+ HIGH INTENT LEADS".into(),
            description: "B2B Real Estate lead generation ecosystem.".into(),
            long_description: "Developed a custom CRM-integrated lead capture system for \
                               luxury real estate firms. We utilized predictive analytics to \
                               identify high-intent buyers before they hit the general market."
                .into(),
            image: "https://picsum.photos/800/600?random=22".into(),
            gallery: vec![
                "https://picsum.photos/800/600?random=22".into(),
                "https://picsum.photos/800/600?random=221".into(),
                "https://picsum.photos/800/600?random=222".into(),
            ],
            tags: vec!["B2B".into(), "LINKEDIN".into(), "CRM".into()],
            color: "text-indigo-600".into(),
        },
        Project {
            id: "3".into(),
            title: "ORBITAL BRANDING".into(),
            stats: "12M GLOBAL REACH".into(),
            description: "International brand launch for a tech startup.".into(),
            long_description: "Created a futuristic visual identity and digital presence for \
                               an aerospace startup. The launch campaign trended globally on \
                               LinkedIn and X for three consecutive days."
                .into(),
            image: "https://picsum.photos/800/600?random=33".into(),
            gallery: vec![
                "https://picsum.photos/800/600?random=33".into(),
                "https://picsum.photos/800/600?random=331".into(),
                "https://picsum.photos/800/600?random=332".into(),
                "https://picsum.photos/800/600?random=333".into(),
            ],
            tags: vec!["BRANDING".into(), "VIRAL".into(), "UX".into()],
            color: "text-emerald-600".into(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// The bookable service catalog. Static configuration, never persisted.
pub fn services() -> Vec<AppointmentService> {
    vec![
        AppointmentService {
            id: "1".into(),
            name: "DIGITAL STRATEGY AUDIT".into(),
            duration: "45 MIN".into(),
            icon: "\u{1F4CA}".into(),
            price: Some("$149".into()),
        },
        AppointmentService {
            id: "2".into(),
            name: "ADS CAMPAIGN SETUP".into(),
            duration: "60 MIN".into(),
            icon: "\u{1F680}".into(),
            price: Some("$299".into()),
        },
        AppointmentService {
            id: "3".into(),
            name: "SOCIAL MEDIA STRATEGY".into(),
            duration: "30 MIN".into(),
            icon: "\u{1F4F1}".into(),
            price: Some("$99".into()),
        },
        AppointmentService {
            id: "4".into(),
            name: "CONVERSION OPTIMIZATION".into(),
            duration: "60 MIN".into(),
            icon: "\u{1F3AF}".into(),
            price: Some("$199".into()),
        },
    ]
}

// ---------------------------------------------------------------------------
// Identity defaults
// ---------------------------------------------------------------------------

/// The hardcoded identity the read-model starts from, so the site is never
/// in a fully-empty state even with no `siteConfig/global` document.
pub fn default_identity() -> SiteIdentity {
    SiteIdentity {
        display_name: "SHAMIM AHMED".into(),
        profile_image: "https://picsum.photos/400/400?grayscale".into(),
        about: AboutContent {
            title: "Designing Digital Ecosystems That Scale Beyond Boundaries.".into(),
            highlight: "Digital Architect / Growth Hacker".into(),
            description: "I am Shamim Ahmed, a dedicated Digital Architect with a relentless \
                          passion for crafting high-performance growth engines. Over the last \
                          7 years, I've transformed small startups into market-dominating \
                          brands using a combination of psychological marketing and \
                          data-driven architecture.\n\nMy methodology focuses on \"The \
                          Nexus\" - where user experience meets business objectives. I don't \
                          just run ads; I build autonomous systems that attract, convert, and \
                          retain customers with surgical precision."
                .into(),
            stats: vec![
                StatItem::new("PROJECTS", "250+"),
                StatItem::new("ROAS", "6.5X"),
                StatItem::new("CLIENTS", "18+"),
                StatItem::new("ADS SPENT", "$4.2M"),
            ],
        },
        contact: ContactChannels {
            email: "hello@shamimahmed.com".into(),
            linkedin: "linkedin.com/in/shamim".into(),
            whatsapp: "whatsapp.secure".into(),
            phone: String::new(),
            facebook: None,
            instagram: None,
            website: None,
        },
    }
}

// ---------------------------------------------------------------------------
// Placeholders for admin "add" actions
// ---------------------------------------------------------------------------

/// The default document a freshly-added project starts from. The single
/// gallery entry keeps the non-empty-gallery invariant from the first save.
pub fn placeholder_project() -> Project {
    Project {
        id: String::new(),
        title: "NEW PROJECT".into(),
        stats: "METRIC / MO".into(),
        description: "Short summary.".into(),
        long_description: "Full operational summary.".into(),
        image: "https://picsum.photos/800/600?random=99".into(),
        gallery: vec!["https://picsum.photos/800/600?random=99".into()],
        tags: vec!["NEW".into()],
        color: "text-cyan-600".into(),
    }
}

/// The default document a freshly-added experience starts from.
pub fn placeholder_experience() -> Experience {
    Experience {
        id: String::new(),
        company: "NEW COMPANY".into(),
        role: "ROLE".into(),
        period: "20XX".into(),
        logo: String::new(),
        tasks: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
