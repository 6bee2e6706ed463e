pub struct CaseAction {
    pub label: &'static str,
    pub url: &'static str,
    pub primary: bool,
}

pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlights: &'static [&'static str],
    pub meta: &'static [&'static str],
    pub actions: &'static [CaseAction],
    pub video_id: Option<&'static str>,
}

pub static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "clearcheck",
        title: "ClearCheck — Advanced Proctoring System",
        subtitle: "AI-powered online proctoring with device and multi-face detection",
        highlights: &[
            "Led a 4-member team to build real-time proctoring workflows.",
            "Implemented face spoofing prevention and device detection.",
            "Selected for SOA PROXIMA 2025 and Top 10 at HackNation.",
        ],
        meta: &["Python", "OpenCV", "ML", "Computer Vision", "Team Lead"],
        actions: &[CaseAction {
            label: "Learn More",
            url: "https://abinya.vercel.app/project.html?id=16",
            primary: true,
        }],
        video_id: None,
    },
    CaseStudy {
        id: "dejaview",
        title: "DejaView — Photo Location Visualizer",
        subtitle: "GPS extraction, maps, and 360° Street View experiences",
        highlights: &[
            "Built a privacy-first Java backend with in-memory processing.",
            "Integrated Google Maps + OpenStreetMap for intelligent 3D view.",
            "Deployed live demo for instant user experience.",
        ],
        meta: &["Java", "Servlets", "JSP", "Maps API", "Full Stack"],
        actions: &[
            CaseAction {
                label: "GitHub",
                url: "https://github.com/nikhilthesingh/DejaView",
                primary: false,
            },
            CaseAction {
                label: "Live Demo",
                url: "https://dejaview-qhig.onrender.com/",
                primary: true,
            },
        ],
        video_id: Some("uh3oMO7EiPg"),
    },
    CaseStudy {
        id: "appup",
        title: "AppUP — Windows Application Updater",
        subtitle: "Matrix-styled CLI updater for 1,500+ non-Store apps",
        highlights: &[
            "Designed a Rich-powered CLI with interactive menus.",
            "Delivered 70% update-effort reduction with centralized flows.",
            "Packaged as a standalone Windows executable using PyInstaller.",
        ],
        meta: &["Python", "Rich", "Windows", "CLI Tool"],
        actions: &[
            CaseAction {
                label: "View on GitHub",
                url: "https://github.com/nikhilthesingh/AppUP",
                primary: true,
            },
            CaseAction {
                label: "Download AppUP",
                url: "https://raw.githubusercontent.com/nikhilthesingh/AppUP/main/AppUP.exe",
                primary: false,
            },
        ],
        video_id: Some("2OAN-6dDhVY"),
    },
];

pub fn find(id: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.id == id)
}
