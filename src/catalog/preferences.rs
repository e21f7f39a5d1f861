//! Section 1 catalog: design work preferences, rated on interest and
//! confidence. Every statement carries exactly one of the two dimensions.

use super::{confidence, interest, Category, Subcategory};

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "s1_research",
            name: "Research",
            description: "The extent to which different research activities energise you and align with how you want to spend your time.",
            color: "#4ECDC4",
            subcategories: vec![
                Subcategory {
                    id: "qual",
                    name: "Qualitative Research",
                    subtitle: "Interviews & Observations",
                    statements: vec![
                        interest("s1_research_qual_1", "I actively seek opportunities to conduct one-on-one user interviews"),
                        confidence("s1_research_qual_2", "I feel confident extracting meaningful insights from user conversations"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "quant",
                    name: "Quantitative Research",
                    subtitle: "Data & Testing",
                    statements: vec![
                        interest("s1_research_quant_1", "I enjoy analysing quantitative data to understand user behaviour"),
                        confidence("s1_research_quant_2", "I trust my ability to design and interpret A/B tests"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "synthesis",
                    name: "Research Synthesis",
                    subtitle: "Patterns & Insights",
                    statements: vec![
                        interest("s1_research_synth_1", "I find satisfaction in organising research findings into actionable insights"),
                        confidence("s1_research_synth_2", "I trust my ability to identify patterns across complex research data"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s1_interaction",
            name: "Interaction Design",
            description: "The extent to which you\u{2019}re drawn to shaping how users navigate and interact with interfaces.",
            color: "#A78BFA",
            subcategories: vec![
                Subcategory {
                    id: "ia_flow",
                    name: "Foundational IA & Flow",
                    subtitle: "Structure & Navigation",
                    statements: vec![
                        interest("s1_ixd_ia_1", "I get excited about organising complex information architectures"),
                        confidence("s1_ixd_ia_2", "I trust my instincts when designing user flows and navigation"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "wireframe",
                    name: "Wireframing & Prototyping",
                    subtitle: "Sketching & Iteration",
                    statements: vec![
                        interest("s1_ixd_wire_1", "I enjoy the process of sketching and wireframing ideas"),
                        confidence("s1_ixd_wire_2", "I feel confident creating interactive prototypes that communicate my vision"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "systems",
                    name: "Systems Thinking",
                    subtitle: "Components & Scalability",
                    statements: vec![
                        interest("s1_ixd_sys_1", "I\u{2019}m drawn to designing reusable component systems"),
                        confidence("s1_ixd_sys_2", "I\u{2019}m confident defining how components should behave across different contexts"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s1_visual",
            name: "Visual Design",
            description: "The extent to which visual craft and aesthetic decisions energise your work.",
            color: "#F472B6",
            subcategories: vec![
                Subcategory {
                    id: "polish",
                    name: "UI Polish & Refinement",
                    subtitle: "Craft & Execution",
                    statements: vec![
                        interest("s1_vis_polish_1", "I get satisfaction from pixel-perfect visual execution"),
                        confidence("s1_vis_polish_2", "I trust my eye for visual hierarchy and composition"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "ds_usage",
                    name: "Design Systems Application",
                    subtitle: "Tokens & Consistency",
                    statements: vec![
                        interest("s1_vis_ds_1", "I enjoy working within and extending existing design systems"),
                        confidence("s1_vis_ds_2", "I\u{2019}m confident applying design tokens and components consistently"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "creative",
                    name: "Creative Expression",
                    subtitle: "Experimentation & Push",
                    statements: vec![
                        interest("s1_vis_create_1", "I\u{2019}m energised by opportunities for visual experimentation"),
                        confidence("s1_vis_create_2", "I trust my ability to balance creative expression with usability"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s1_accessibility",
            name: "Accessibility",
            description: "The extent to which inclusive design practices align with your interests and values.",
            color: "#34D399",
            subcategories: vec![
                Subcategory {
                    id: "standards",
                    name: "Standards & Compliance",
                    subtitle: "Guidelines & Advocacy",
                    statements: vec![
                        interest("s1_a11y_std_1", "I actively seek out learning about WCAG guidelines and accessibility standards"),
                        confidence("s1_a11y_std_2", "I\u{2019}m confident auditing designs for accessibility issues independently"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "inclusive",
                    name: "Inclusive Design Thinking",
                    subtitle: "Diverse & Cognitive Needs",
                    statements: vec![
                        interest("s1_a11y_inc_1", "I\u{2019}m energised by designing for diverse cognitive and sensory needs"),
                        confidence("s1_a11y_inc_2", "I trust my ability to identify accessibility barriers early in the design process"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s1_tech",
            name: "Tech Skills",
            description: "The extent to which technical capabilities and emerging tools interest you.",
            color: "#FB923C",
            subcategories: vec![
                Subcategory {
                    id: "code",
                    name: "Code & Implementation",
                    subtitle: "HTML/CSS & Beyond",
                    statements: vec![
                        interest("s1_tech_code_1", "I\u{2019}m excited about understanding how designs are built technically"),
                        confidence("s1_tech_code_2", "I\u{2019}m confident working with code to refine designs in the browser"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "ai",
                    name: "AI & Automation",
                    subtitle: "Generative AI & Workflows",
                    statements: vec![
                        interest("s1_tech_ai_1", "I\u{2019}m energised by exploring AI tools in design workflows"),
                        confidence("s1_tech_ai_2", "I feel confident experimenting with and evaluating generative AI tools for design"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "tooling",
                    name: "Design Tooling",
                    subtitle: "Tools & Emerging Tech",
                    statements: vec![
                        interest("s1_tech_tool_1", "I enjoy learning and pushing the limits of design and prototyping tools"),
                        confidence("s1_tech_tool_2", "I\u{2019}m confident enough with my tooling knowledge to teach others"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s1_strategy",
            name: "Strategy & Conceptual Thinking",
            description: "The extent to which high-level design strategy and vision work appeals to you.",
            color: "#FACC15",
            subcategories: vec![
                Subcategory {
                    id: "framing",
                    name: "Problem Framing",
                    subtitle: "Defining the Right Problem",
                    statements: vec![
                        interest("s1_strat_frame_1", "I\u{2019}m energised by defining what problem we should actually be solving"),
                        confidence("s1_strat_frame_2", "I trust my ability to frame ambiguous problems clearly for a team"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "vision",
                    name: "Design Vision",
                    subtitle: "Strategy & Business Goals",
                    statements: vec![
                        interest("s1_strat_vision_1", "I enjoy imagining future-state experiences and long-term design directions"),
                        confidence("s1_strat_vision_2", "I\u{2019}m confident articulating design strategy to stakeholders and leadership"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
    ]
}
