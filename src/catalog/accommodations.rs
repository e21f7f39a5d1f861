//! Section 3 catalog: accommodations, rated on need. Some subcategories carry
//! a non-negotiable toggle statement.

use super::{need, Category, Statement, Subcategory};

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "s3_communication",
            name: "Communication Accommodations",
            description: "How you need information structured and delivered.",
            color: "#4ECDC4",
            subcategories: vec![
                Subcategory {
                    id: "meeting_support",
                    name: "Meeting Support",
                    subtitle: "Agendas, Processing & Follow-up",
                    statements: vec![
                        need("s3_comm_meet_1", "Written agendas sent before meetings"),
                        need("s3_comm_meet_2", "Time to process before being expected to respond"),
                        need("s3_comm_meet_3", "Written follow-up after verbal discussions or decisions"),
                    ],
                    current: None,
                    non_negotiable: Some(Statement::Toggle {
                        id: "s3_comm_meet_nn",
                        text: "These communication supports are non-negotiable for me",
                    }),
                },
                Subcategory {
                    id: "clarity_prep",
                    name: "Clarity & Preparation",
                    subtitle: "Directness & Advance Notice",
                    statements: vec![
                        need("s3_comm_clar_1", "Clear, direct communication (not hints or subtext)"),
                        need("s3_comm_clar_2", "Advance notice before presenting or being put on the spot"),
                        need("s3_comm_clar_3", "Permission to ask clarifying questions without judgment"),
                        need("s3_comm_clar_4", "Access to meeting notes or minutes"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
                Subcategory {
                    id: "comm_mode",
                    name: "Communication Mode",
                    subtitle: "Async Options",
                    statements: vec![
                        need("s3_comm_async_1", "Async communication options (not everything needs to be real-time)"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s3_time",
            name: "Time & Schedule Accommodations",
            description: "How your time needs to be structured and protected.",
            color: "#A78BFA",
            subcategories: vec![
                Subcategory {
                    id: "schedule",
                    name: "Schedule Control",
                    subtitle: "Flexibility & Focus Blocks",
                    statements: vec![
                        need("s3_time_sched_1", "Flexible start and end times"),
                        need("s3_time_sched_2", "Control over when meetings are scheduled"),
                        need("s3_time_sched_3", "Protected blocks of focus time"),
                        need("s3_time_sched_4", "Buffer time between meetings to reset"),
                    ],
                    current: None,
                    non_negotiable: Some(Statement::Toggle {
                        id: "s3_time_sched_nn",
                        text: "Schedule flexibility is non-negotiable for me",
                    }),
                },
                Subcategory {
                    id: "workload",
                    name: "Workload Management",
                    subtitle: "Meetings, Switching & Recovery",
                    statements: vec![
                        need("s3_time_work_1", "Reduced overall meeting load"),
                        need("s3_time_work_2", "Time to prepare for context switches"),
                        need("s3_time_work_3", "Deadline flexibility during high-stress periods"),
                        need("s3_time_work_4", "Recovery time built in after intense work periods"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s3_sensory",
            name: "Sensory Accommodations",
            description: "Environmental factors that affect your ability to focus and function.",
            color: "#F472B6",
            subcategories: vec![
                Subcategory {
                    id: "env_control",
                    name: "Environment Control",
                    subtitle: "Noise, Light & Temperature",
                    statements: vec![
                        need("s3_sens_env_1", "Control over noise levels (access to quiet space)"),
                        need("s3_sens_env_2", "Control over lighting"),
                        need("s3_sens_env_3", "Control over temperature"),
                        need("s3_sens_env_4", "Ability to minimise visual distractions"),
                    ],
                    current: None,
                    non_negotiable: Some(Statement::Toggle {
                        id: "s3_sens_env_nn",
                        text: "Sensory control is non-negotiable for me",
                    }),
                },
                Subcategory {
                    id: "workspace_flex",
                    name: "Workspace Flexibility",
                    subtitle: "Choice & Remote Options",
                    statements: vec![
                        need("s3_sens_ws_1", "Choice of where I work (different spaces for different tasks)"),
                        need("s3_sens_ws_2", "Remote work options"),
                        need("s3_sens_ws_3", "Full control over my sensory environment"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s3_workload",
            name: "Workload Accommodations",
            description: "How work needs to be distributed and managed.",
            color: "#34D399",
            subcategories: vec![
                Subcategory {
                    id: "task_mgmt",
                    name: "Task Management",
                    subtitle: "Priorities & Timelines",
                    statements: vec![
                        need("s3_wl_task_1", "Reduced context switching between projects"),
                        need("s3_wl_task_2", "One clear priority at a time (when possible)"),
                        need("s3_wl_task_3", "Clear prioritisation from leadership when juggling multiple things"),
                        need("s3_wl_task_4", "Realistic timelines that account for actual capacity"),
                    ],
                    current: None,
                    non_negotiable: Some(Statement::Toggle {
                        id: "s3_wl_task_nn",
                        text: "Workload management supports are non-negotiable for me",
                    }),
                },
                Subcategory {
                    id: "boundaries",
                    name: "Boundaries & Monitoring",
                    subtitle: "Pushback & Check-ins",
                    statements: vec![
                        need("s3_wl_bound_1", "Permission to say no or push back on unrealistic demands"),
                        need("s3_wl_bound_2", "Regular check-ins to monitor workload before it becomes overwhelming"),
                        need("s3_wl_bound_3", "Fewer simultaneous projects"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s3_structure",
            name: "Structure Accommodations",
            description: "How processes and expectations need to be organised.",
            color: "#FB923C",
            subcategories: vec![
                Subcategory {
                    id: "doc",
                    name: "Clarity & Documentation",
                    subtitle: "Processes & Templates",
                    statements: vec![
                        need("s3_struc_doc_1", "Clear structures and processes for how work gets done"),
                        need("s3_struc_doc_2", "Written instructions and documentation (not just verbal)"),
                        need("s3_struc_doc_3", "Predictable patterns in how work flows"),
                        need("s3_struc_doc_4", "Templates and frameworks to work from"),
                    ],
                    current: None,
                    non_negotiable: Some(Statement::Toggle {
                        id: "s3_struc_doc_nn",
                        text: "Structure and clarity are non-negotiable for me",
                    }),
                },
                Subcategory {
                    id: "support",
                    name: "Support & Stability",
                    subtitle: "PM Support & Check-ins",
                    statements: vec![
                        need("s3_struc_sup_1", "Project management support (tools, processes, someone tracking)"),
                        need("s3_struc_sup_2", "Regular check-ins on progress and blockers"),
                        need("s3_struc_sup_3", "External accountability and structure"),
                        need("s3_struc_sup_4", "Advance notice when things are changing"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
        Category {
            id: "s3_team",
            name: "Team Dynamics Accommodations",
            description: "How group interactions need to be adjusted.",
            color: "#FACC15",
            subcategories: vec![
                Subcategory {
                    id: "meeting_mods",
                    name: "Meeting Modifications",
                    subtitle: "Size, Purpose & Warning",
                    statements: vec![
                        need("s3_team_meet_1", "Smaller meeting sizes when possible"),
                        need("s3_team_meet_2", "Clear purpose stated for every meeting"),
                        need("s3_team_meet_3", "Optional attendance at social events"),
                        need("s3_team_meet_4", "Warning before being called on or put on the spot"),
                    ],
                    current: None,
                    non_negotiable: Some(Statement::Toggle {
                        id: "s3_team_meet_nn",
                        text: "These meeting modifications are non-negotiable for me",
                    }),
                },
                Subcategory {
                    id: "social",
                    name: "Social Adjustments",
                    subtitle: "Camera & Performance Pressure",
                    statements: vec![
                        need("s3_team_soc_1", "Camera-off options for video calls when needed"),
                        need("s3_team_soc_2", "Reduced pressure to be \u{2018}on\u{2019} or performative in group settings"),
                    ],
                    current: None,
                    non_negotiable: None,
                },
            ],
        },
    ]
}
