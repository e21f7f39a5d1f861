//! Section 2 catalog: work environment needs. Rated statements collect both
//! importance and current; some subcategories add a single "current vs ideal"
//! statement used for gap analysis.

use super::{dual, Category, Statement, Subcategory};

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "s2_team",
            name: "Team Dynamics",
            description: "How you work best with others and what kind of team culture supports your success.",
            color: "#4ECDC4",
            subcategories: vec![
                Subcategory {
                    id: "structure",
                    name: "Team Structure",
                    subtitle: "Size, Roles & Safety",
                    statements: vec![
                        dual("s2_team_struct_1", "Working on a small, close-knit team"),
                        dual("s2_team_struct_2", "Having clear roles and responsibilities within the team"),
                        dual("s2_team_struct_3", "Feeling psychologically safe to speak up and make mistakes"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_team_struct_c",
                        text: "My current team has the right level of psychological safety",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "collab_style",
                    name: "Collaboration Style",
                    subtitle: "Balance & Feedback",
                    statements: vec![
                        dual("s2_team_collab_1", "Having a balance between collaborative and independent work"),
                        dual("s2_team_collab_2", "Regular, structured feedback from teammates"),
                        dual("s2_team_collab_3", "Genuine social connection with my teammates (not just work talk)"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_team_collab_c",
                        text: "I have enough space for independent deep work",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "culture",
                    name: "Team Culture",
                    subtitle: "Diversity & Conflict",
                    statements: vec![
                        dual("s2_team_culture_1", "Working with diverse perspectives and backgrounds"),
                        dual("s2_team_culture_2", "Being on a team that handles conflict constructively"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s2_autonomy",
            name: "Autonomy & Decision-Making",
            description: "How much control and ownership you need over your work.",
            color: "#A78BFA",
            subcategories: vec![
                Subcategory {
                    id: "approach",
                    name: "Work Approach",
                    subtitle: "Freedom & Direction",
                    statements: vec![
                        dual("s2_auto_approach_1", "Freedom in how I approach problems and solutions"),
                        dual("s2_auto_approach_2", "Control over my schedule and working hours"),
                        dual("s2_auto_approach_3", "Ability to shape the direction of projects I\u{2019}m on"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_auto_approach_c",
                        text: "I have enough autonomy in how I work",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "trust",
                    name: "Trust & Ownership",
                    subtitle: "Decisions & Accountability",
                    statements: vec![
                        dual("s2_auto_trust_1", "Being trusted to make decisions without constant approval"),
                        dual("s2_auto_trust_2", "Having input on which projects I work on"),
                        dual("s2_auto_trust_3", "Taking ownership over outcomes and results"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_auto_trust_c",
                        text: "I feel trusted to make good design decisions",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "experiment",
                    name: "Experimentation",
                    subtitle: "Risk & Learning",
                    statements: vec![
                        dual("s2_auto_exp_1", "Having space to experiment and try new approaches"),
                        dual("s2_auto_exp_2", "Permission to fail and learn from mistakes"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s2_communication",
            name: "Communication Style",
            description: "How you need information to flow and how you prefer to interact.",
            color: "#F472B6",
            subcategories: vec![
                Subcategory {
                    id: "modes",
                    name: "Communication Modes",
                    subtitle: "Written, Async & Meetings",
                    statements: vec![
                        dual("s2_comm_mode_1", "More written communication than verbal"),
                        dual("s2_comm_mode_2", "More asynchronous communication than real-time"),
                        dual("s2_comm_mode_3", "Low meeting frequency and shorter meetings"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_comm_mode_c",
                        text: "My team\u{2019}s meeting culture works for me",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "clarity",
                    name: "Clarity & Processing",
                    subtitle: "Documentation & Time",
                    statements: vec![
                        dual("s2_comm_clarity_1", "Clear, written documentation of decisions and processes"),
                        dual("s2_comm_clarity_2", "Crystal-clear expectations about what\u{2019}s needed from me"),
                        dual("s2_comm_clarity_3", "Time to process information before responding"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_comm_clarity_c",
                        text: "I get the information I need in a format that works for me",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "feedback",
                    name: "Feedback Culture",
                    subtitle: "Directness & Tone",
                    statements: vec![
                        dual("s2_comm_fb_1", "Direct, straightforward feedback (not hinting or implying)"),
                        dual("s2_comm_fb_2", "Informal, conversational interactions over formal ones"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s2_structure",
            name: "Work Structure",
            description: "How work is organised and the predictability you need.",
            color: "#34D399",
            subcategories: vec![
                Subcategory {
                    id: "predict",
                    name: "Clarity & Predictability",
                    subtitle: "Priorities & Workload",
                    statements: vec![
                        dual("s2_struct_pred_1", "Clear priorities and goals at all times"),
                        dual("s2_struct_pred_2", "Predictable workload rather than constant surprises"),
                        dual("s2_struct_pred_3", "Longer-term projects over short sprints"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_struct_pred_c",
                        text: "My work priorities are clear and stable",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "focus",
                    name: "Focus & Context",
                    subtitle: "Deep Work & Flexibility",
                    statements: vec![
                        dual("s2_struct_focus_1", "Minimal context switching between different projects"),
                        dual("s2_struct_focus_2", "Protected, uninterrupted time for deep focus"),
                        dual("s2_struct_focus_3", "Flexibility in how I structure my day"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_struct_focus_c",
                        text: "I have enough dedicated focus time",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "process",
                    name: "Process",
                    subtitle: "Deadlines & Workflows",
                    statements: vec![
                        dual("s2_struct_proc_1", "Clear deadlines and milestones"),
                        dual("s2_struct_proc_2", "Well-defined processes and workflows (not ad-hoc)"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s2_leadership",
            name: "Leadership & Management",
            description: "What you need from your manager and leadership.",
            color: "#FB923C",
            subcategories: vec![
                Subcategory {
                    id: "manager",
                    name: "Manager Relationship",
                    subtitle: "Communication & Trust",
                    statements: vec![
                        dual("s2_lead_mgr_1", "Manager who communicates clearly and directly"),
                        dual("s2_lead_mgr_2", "Regular 1-on-1s with my manager"),
                        dual("s2_lead_mgr_3", "Manager who trusts my expertise and doesn\u{2019}t micromanage"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_lead_mgr_c",
                        text: "My manager\u{2019}s style works well for me",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "support",
                    name: "Support & Advocacy",
                    subtitle: "Growth & Conflict",
                    statements: vec![
                        dual("s2_lead_sup_1", "Active career development support from my manager"),
                        dual("s2_lead_sup_2", "Manager who advocates for team and individual needs"),
                        dual("s2_lead_sup_3", "Manager who handles conflicts constructively"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_lead_sup_c",
                        text: "I feel supported in my professional growth",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "recognition",
                    name: "Recognition",
                    subtitle: "Appreciation & Trust",
                    statements: vec![
                        dual("s2_lead_rec_1", "Regular recognition and appreciation for good work"),
                        dual("s2_lead_rec_2", "Manager who trusts my judgment on design decisions"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s2_growth",
            name: "Growth & Learning",
            description: "Opportunities for development and skill-building.",
            color: "#FACC15",
            subcategories: vec![
                Subcategory {
                    id: "development",
                    name: "Development Opportunities",
                    subtitle: "Learning & Challenges",
                    statements: vec![
                        dual("s2_grow_dev_1", "Access to new learning opportunities"),
                        dual("s2_grow_dev_2", "Support for skill development (time, budget, resources)"),
                        dual("s2_grow_dev_3", "Exposure to new challenges and problem spaces"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_grow_dev_c",
                        text: "I have enough opportunities to learn and grow",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "career",
                    name: "Career Progression",
                    subtitle: "Path & Mentorship",
                    statements: vec![
                        dual("s2_grow_career_1", "Clear path for career progression"),
                        dual("s2_grow_career_2", "Mentorship or coaching availability"),
                        dual("s2_grow_career_3", "Time allocated specifically for professional development"),
                        dual("s2_grow_career_4", "Stretch projects that push my capabilities"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s2_physical",
            name: "Physical/Sensory Environment",
            description: "Your workspace and sensory needs.",
            color: "#60A5FA",
            subcategories: vec![
                Subcategory {
                    id: "location",
                    name: "Location & Setup",
                    subtitle: "Remote, Noise & Lighting",
                    statements: vec![
                        dual("s2_phys_loc_1", "Primarily remote work"),
                        dual("s2_phys_loc_2", "Control over noise levels in my workspace"),
                        dual("s2_phys_loc_3", "Control over lighting in my workspace"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_phys_loc_c",
                        text: "My work environment supports my sensory needs",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "space",
                    name: "Space & Comfort",
                    subtitle: "Temperature, Desk & Commute",
                    statements: vec![
                        dual("s2_phys_space_1", "Control over temperature"),
                        dual("s2_phys_space_2", "Flexibility in desk setup and equipment"),
                        dual("s2_phys_space_3", "Access to private, quiet space when needed"),
                        dual("s2_phys_space_4", "Minimal or manageable commute"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_phys_space_c",
                        text: "I have the physical workspace I need to do my best work",
                    }),
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s2_boundaries",
            name: "Work-Life Boundaries",
            description: "How work respects your time and energy outside work hours.",
            color: "#C084FC",
            subcategories: vec![
                Subcategory {
                    id: "time",
                    name: "Time Boundaries",
                    subtitle: "Off-hours & Availability",
                    statements: vec![
                        dual("s2_bound_time_1", "Strict respect for off-hours and personal time"),
                        dual("s2_bound_time_2", "Healthy vacation and time-off culture"),
                        dual("s2_bound_time_3", "No expectation of constant availability"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_bound_time_c",
                        text: "My team respects my boundaries around work hours",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "sustain",
                    name: "Sustainability",
                    subtitle: "Workload & Disconnect",
                    statements: vec![
                        dual("s2_bound_sust_1", "Sustainable workload that doesn\u{2019}t lead to burnout"),
                        dual("s2_bound_sust_2", "Flexibility for medical appointments and life needs"),
                        dual("s2_bound_sust_3", "Organisation that actively prevents burnout"),
                        dual("s2_bound_sust_4", "Permission to truly disconnect outside work"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_bound_sust_c",
                        text: "My workload feels sustainable long-term",
                    }),
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s2_org",
            name: "Organisational Culture",
            description: "Broader company culture and values.",
            color: "#F87171",
            subcategories: vec![
                Subcategory {
                    id: "values",
                    name: "Values & Respect",
                    subtitle: "Design Culture & Alignment",
                    statements: vec![
                        dual("s2_org_val_1", "Strong alignment with company values"),
                        dual("s2_org_val_2", "Organisation with mature design culture"),
                        dual("s2_org_val_3", "Cross-functional respect for design\u{2019}s role"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_org_val_c",
                        text: "Design is valued and respected in my organisation",
                    }),
                    non_negotiable: None,
                },
                Subcategory {
                    id: "decisions",
                    name: "Decision-Making & Transparency",
                    subtitle: "Experimentation & Inclusion",
                    statements: vec![
                        dual("s2_org_dec_1", "Culture that encourages experimentation and risk-taking"),
                        dual("s2_org_dec_2", "Fast decision-making without excessive bureaucracy"),
                        dual("s2_org_dec_3", "Low political complexity"),
                        dual("s2_org_dec_4", "Transparency about how decisions are made"),
                        dual("s2_org_dec_5", "Genuine inclusion and belonging for neurodivergent people"),
                    ],
                    current: Some(Statement::Current {
                        id: "s2_org_dec_c",
                        text: "I understand how decisions are made in my organisation",
                    }),
                    non_negotiable: None,
                },
            ],
        },
    ]
}
