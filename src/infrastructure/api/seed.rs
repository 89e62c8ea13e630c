use crate::domain::deals::{Amount, Deal, DealId, DealMetrics, FundingStage, Score};

/// The canonical catalog: six records, seeded once at startup and never
/// mutated. The repository hands out copies, callers never see this Vec.
pub fn seed_deals() -> Vec<Deal> {
    vec![
        Deal {
            id: DealId::new(1),
            name: "TechFlow Ventures Series A".to_string(),
            company: "TechFlow Inc.".to_string(),
            sector: "SaaS".to_string(),
            stage: FundingStage::SeriesA,
            amount: Amount::new(15_000_000),
            score: Score::new(8.5),
            description: "AI-powered workflow automation platform for enterprise clients. \
                          Strong recurring revenue model with 150% net revenue retention."
                .to_string(),
            metrics: DealMetrics::new("$2.4M ARR", "300% YoY", 45, 28),
            investors: vec!["Accel Partners".to_string(), "Index Ventures".to_string()],
            founded: 2021,
            location: "San Francisco, CA".to_string(),
        },
        Deal {
            id: DealId::new(2),
            name: "GreenEnergy Solutions Seed".to_string(),
            company: "GreenEnergy Solutions".to_string(),
            sector: "CleanTech".to_string(),
            stage: FundingStage::Seed,
            amount: Amount::new(3_500_000),
            score: Score::new(7.2),
            description: "Solar panel efficiency optimization using machine learning. \
                          Targeting residential and commercial markets."
                .to_string(),
            metrics: DealMetrics::new("$450K ARR", "180% YoY", 12, 15),
            investors: vec!["Breakthrough Energy Ventures".to_string()],
            founded: 2022,
            location: "Austin, TX".to_string(),
        },
        Deal {
            id: DealId::new(3),
            name: "HealthTech Analytics Series B".to_string(),
            company: "MedInsight Analytics".to_string(),
            sector: "HealthTech".to_string(),
            stage: FundingStage::SeriesB,
            amount: Amount::new(25_000_000),
            score: Score::new(9.1),
            description: "Healthcare data analytics platform helping hospitals reduce costs \
                          and improve patient outcomes through predictive insights."
                .to_string(),
            metrics: DealMetrics::new("$8.2M ARR", "220% YoY", 78, 65),
            investors: vec![
                "Andreessen Horowitz".to_string(),
                "GV".to_string(),
                "Bessemer Venture Partners".to_string(),
            ],
            founded: 2019,
            location: "Boston, MA".to_string(),
        },
        Deal {
            id: DealId::new(4),
            name: "FinTech Disruptor Seed".to_string(),
            company: "PayFlow Technologies".to_string(),
            sector: "FinTech".to_string(),
            stage: FundingStage::Seed,
            amount: Amount::new(5_000_000),
            score: Score::new(6.8),
            description: "Digital payment infrastructure for emerging markets. Focus on \
                          cross-border transactions and financial inclusion."
                .to_string(),
            metrics: DealMetrics::new("$680K ARR", "250% YoY", 23, 18),
            investors: vec!["Ribbit Capital".to_string(), "QED Investors".to_string()],
            founded: 2022,
            location: "New York, NY".to_string(),
        },
        Deal {
            id: DealId::new(5),
            name: "EdTech Revolution Series A".to_string(),
            company: "LearnSmart Platform".to_string(),
            sector: "EdTech".to_string(),
            stage: FundingStage::SeriesA,
            amount: Amount::new(12_000_000),
            score: Score::new(8.0),
            description: "Personalized learning platform using AI to adapt curriculum to \
                          individual student needs. Strong adoption in K-12 schools."
                .to_string(),
            metrics: DealMetrics::new("$1.8M ARR", "400% YoY", 156, 32),
            investors: vec!["Owl Ventures".to_string(), "Reach Capital".to_string()],
            founded: 2020,
            location: "Seattle, WA".to_string(),
        },
        Deal {
            id: DealId::new(6),
            name: "Cybersecurity Shield Series C".to_string(),
            company: "SecureNet Systems".to_string(),
            sector: "Cybersecurity".to_string(),
            stage: FundingStage::SeriesC,
            amount: Amount::new(45_000_000),
            score: Score::new(9.3),
            description: "Enterprise cybersecurity platform with AI-driven threat detection. \
                          Protecting Fortune 500 companies from advanced persistent threats."
                .to_string(),
            metrics: DealMetrics::new("$18.5M ARR", "180% YoY", 234, 145),
            investors: vec![
                "Sequoia Capital".to_string(),
                "Lightspeed Venture Partners".to_string(),
                "CRV".to_string(),
            ],
            founded: 2018,
            location: "Palo Alto, CA".to_string(),
        },
    ]
}
