//! Static page copy. Nothing here is inspected by the view state; it only
//! feeds markup.

pub const OWNER_NAME: &str = "Anant Suthar";
pub const BRAND_FIRST: &str = "ANANT";
pub const BRAND_LAST: &str = "SUTHAR";
pub const TAGLINE: &str = "Cybersecurity & Full Stack Developer";
pub const HERO_INTRO: &str = "A driven B.Tech CSE student passionate about building secure, real-world solutions. Bridging the gap between robust cybersecurity and modern web development.";
pub const PROFILE_IMAGE: &str = "/profile.jpg";
pub const PROFILE_ALT: &str = "Anant Suthar - Cybersecurity & Full Stack Developer";
pub const GITHUB_URL: &str = "https://github.com/anant720";
pub const EMAIL: &str = "nntsuthar@gmail.com";
pub const MAILTO: &str = "mailto:nntsuthar@gmail.com";
pub const LOCATION: &str = "Pune, India";

pub const ABOUT_HEADLINE: &str = "Securing the Digital Future";
pub const ABOUT_BODY: &str = "I am a B.Tech Cybersecurity student at MIT ADT University (2024-2028) with a fervent interest in secure coding, networking, and machine learning. My journey involves not just understanding how systems work, but how to protect them. From building AI-driven scam detection engines to full-stack e-commerce platforms, I merge security principles with functional design.";

pub const CONTACT_HEADLINE: &str = "Let's Build Something Secure";
pub const CONTACT_BODY: &str = "Currently open to internships and collaborative projects. Whether you have a question or just want to say hi, I'll try my best to get back to you!";

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: GITHUB_URL, glyph: "⌥" },
    SocialLink { label: "LeetCode", href: "https://leetcode.com/u/__anant72/", glyph: "</>" },
    SocialLink { label: "HackerRank", href: "https://www.hackerrank.com/profile/nntsuthar", glyph: ">_" },
    SocialLink { label: "Email", href: MAILTO, glyph: "✉" },
];

pub struct EducationEntry {
    pub period: &'static str,
    pub degree: &'static str,
    pub school: &'static str,
    pub detail: &'static str,
    pub current: bool,
}

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        period: "2024 - 2028",
        degree: "B.Tech in Computer Science",
        school: "MIT ADT University, Pune",
        detail: "Specialization in Cybersecurity",
        current: true,
    },
    EducationEntry {
        period: "2024",
        degree: "Higher Secondary (XII)",
        school: "MDS Senior Secondary School",
        detail: "Science Stream • 84.60%",
        current: false,
    },
];

pub struct Achievement {
    pub title: &'static str,
    pub glyph: &'static str,
    pub summary: &'static str,
    pub points: &'static [(&'static str, &'static str)],
    pub links: &'static [(&'static str, &'static str)],
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "JEE Main 2024 Qualified",
        glyph: "★",
        summary: "Secured 96.4 Percentile in one of India's most competitive engineering entrance exams.",
        points: &[],
        links: &[],
    },
    Achievement {
        title: "Hackathon Participation",
        glyph: "⌖",
        summary: "",
        points: &[
            ("AI for Bharat", "Participated in building AI-driven solutions for Indian demographics."),
            ("AMD Slingshot", "Competed in high-performance computing challenges."),
        ],
        links: &[],
    },
    Achievement {
        title: "Competitive Programming",
        glyph: "</>",
        summary: "Recently started journey on major platforms to enhance problem-solving skills.",
        points: &[],
        links: &[
            ("LeetCode", "https://leetcode.com/u/__anant72/"),
            ("HackerRank", "https://www.hackerrank.com/profile/nntsuthar"),
        ],
    },
];

pub struct ExperienceEntry {
    pub date: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub summary: &'static str,
    pub certificate: Option<(&'static str, &'static str)>,
}

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    date: "Jan 2026",
    role: "Fund Raising Head Internship",
    organization: "Aapka Sahara Foundation",
    summary: "Contributed to outreach initiatives and supported fundraising activities to promote the organization's mission. Demonstrated strong communication skills by engaging with networks and encouraging community participation for social impact.",
    certificate: Some((
        "/internship-fundraising.jpg",
        "Fund Raising Head Internship Certificate - Aapka Sahara Foundation",
    )),
}];

pub struct SkillGroup {
    pub title: &'static str,
    pub glyph: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        glyph: ">_",
        skills: &["Java", "Python", "C", "C++", "JavaScript", "HTML5", "CSS3", "C#", "SQL"],
    },
    SkillGroup {
        title: "Web Development",
        glyph: "◎",
        skills: &[
            "React", "MERN Stack", "Node.js", "Express.js", "Tailwind CSS", "Vite", "TypeScript",
            "Socket.IO", "REST API", "Firebase", "Next.js",
        ],
    },
    SkillGroup {
        title: "Cybersecurity",
        glyph: "⛨",
        skills: &[
            "Ethical Hacking", "Network Security", "SIEM", "Cloud Security", "OWASP",
            "Cryptography", "Penetration Testing",
        ],
    },
    SkillGroup {
        title: "AI & Machine Learning",
        glyph: "⌬",
        skills: &[
            "Machine Learning", "Python Libraries", "OpenAI API", "Gemini", "Deepseek",
            "Prompt Engineering", "AI Voiceover", "AI Image Gen",
        ],
    },
    SkillGroup {
        title: "Database & Cloud",
        glyph: "⛁",
        skills: &[
            "MongoDB", "PostgreSQL", "MS SQL Server", "Oracle", "Google Cloud", "Microsoft Azure",
            "Vercel", "DBMS",
        ],
    },
    SkillGroup {
        title: "Tools & Soft Skills",
        glyph: "⚒",
        skills: &[
            "Git", "GitHub", "VS Code", "Postman", "Figma", "Canva", "Notion", "Leadership",
            "Communication",
        ],
    },
];

pub struct Project {
    pub name: &'static str,
    pub glyph: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub demo: Option<&'static str>,
    pub source: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "GigFlow Marketplace",
        glyph: "⚒",
        summary: "Full stack freelance marketplace with secure auth, real-time DB, and payment gateway support. Inspired by Internshala.",
        tags: &["MERN", "Stripe API"],
        demo: Some("https://gig-flow-wine-alpha.vercel.app/"),
        source: Some("https://github.com/anant720/GigFlow"),
    },
    Project {
        name: "SecurePass Analyzer",
        glyph: "⚿",
        summary: "Cybersecurity tool to analyze password strength using custom rules and zxcvbn. Features attack simulations and breach detection.",
        tags: &["Security", "zxcvbn"],
        demo: None,
        source: Some("https://github.com/anant720/SecurePass-Analyzer"),
    },
    Project {
        name: "AI Guardian Engine",
        glyph: "⛨",
        summary: "AI-based system to detect scam and phishing messages in real-time. Implements risk scoring and classification (Safe/Suspicious).",
        tags: &["ML/AI", "Python"],
        demo: None,
        source: Some("https://github.com/anant720/AI-GUARDIAN"),
    },
    Project {
        name: "PhishNetra",
        glyph: "</>",
        summary: "Advanced phishing detection tool designed to identify malicious URLs and protect users from cyber threats.",
        tags: &["Cybersecurity", "Python"],
        demo: None,
        source: Some("https://github.com/anant720/PhishNetra"),
    },
    Project {
        name: "Campus Buddy",
        glyph: "⌖",
        summary: "University info system providing centralized campus details, map navigation, 3D views, and event management.",
        tags: &["Google Apps Script"],
        demo: None,
        source: None,
    },
];

pub struct FeaturedCertificate {
    pub kind: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub program: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub highlights: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub const FEATURED_CERTIFICATE: FeaturedCertificate = FeaturedCertificate {
    kind: "Specialization Certificate",
    title: "Google Cybersecurity Professional Certificate",
    issuer: "Google",
    program: "9-course professional program",
    image: "/cert-googlecyber.jpg",
    description: "Completed a rigorous, hands-on specialization designed to prepare for entry-level cybersecurity roles. The program covers risk management, network security, Linux & SQL, Python automation, SIEM tools, and end-to-end incident response workflows.",
    link: "https://coursera.org/share/32de91a4599b16abad3c579d3cc42794",
    highlights: &[
        "Foundations of cybersecurity, CIA triad & security ethics",
        "Risk, threats & vulnerabilities using NIST frameworks",
        "Network security with firewalls, VPNs & secure protocols",
        "Linux, SQL & log analysis for threat investigation",
    ],
    skills: &[
        "Python Automation",
        "Linux",
        "SQL",
        "SIEM & IDS",
        "Network Security",
        "Risk Management",
        "Incident Response",
        "Packet Analysis",
    ],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CertificateEntry {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub link: Option<&'static str>,
}

impl CertificateEntry {
    pub fn thumbnail_alt(&self) -> String {
        format!("{} Certificate", self.title)
    }

    pub fn lightbox_alt(&self) -> String {
        format!("{} Certificate - {}", self.title, self.issuer)
    }
}

pub const CERTIFICATES: &[CertificateEntry] = &[
    CertificateEntry {
        title: "Foundations of Cybersecurity",
        issuer: "Google",
        date: "Jan 2026",
        image: "/cert-cybersecurity.jpg",
        link: Some("https://www.coursera.org/account/accomplishments/verify/8PGJ029REWQA"),
    },
    CertificateEntry {
        title: "Introduction to Web Development",
        issuer: "UC Davis",
        date: "Jan 2026",
        image: "/cert-webdev.jpg",
        link: Some("https://coursera.org/share/b0cb7b463d07ce63aabbaa58dd211bed"),
    },
    CertificateEntry {
        title: "Bits and Bytes of Computer Networking",
        issuer: "Google",
        date: "Jan 2026",
        image: "/cert-networking.jpg",
        link: Some("https://coursera.org/share/fd9f3dbee1b433e0a0af3001369986f9"),
    },
    CertificateEntry {
        title: "Object-Oriented Programming in Java",
        issuer: "IBM",
        date: "Jan 2026",
        image: "/cert-java.jpg",
        link: Some("https://coursera.org/share/c2867e0f38ad955dd4be2a1f179ed3f3"),
    },
    CertificateEntry {
        title: "HTML, CSS, and JS for Web Devs",
        issuer: "Johns Hopkins Univ.",
        date: "Dec 2025",
        image: "/cert-frontend.jpg",
        link: Some("https://coursera.org/share/65034878fcb218a396cddd5f8c2100ae"),
    },
    CertificateEntry {
        title: "Google Cloud Computing Foundations",
        issuer: "Google Cloud",
        date: "Feb 2026",
        image: "/cert-cloud.jpg",
        link: None,
    },
    CertificateEntry {
        title: "Spoken Tutorial C & C++",
        issuer: "IIT Bombay",
        date: "May 2025",
        image: "/cert-cpp.jpg",
        link: None,
    },
    CertificateEntry {
        title: "Connect And Protect: Networks and Networks Security",
        issuer: "Google",
        date: "Feb 2026",
        image: "/cert-networksecurity.jpg",
        link: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_alt_text_names_title_and_issuer() {
        let java = CERTIFICATES
            .iter()
            .find(|cert| cert.issuer == "IBM")
            .expect("IBM certificate present");

        assert_eq!(java.thumbnail_alt(), "Object-Oriented Programming in Java Certificate");
        assert_eq!(
            java.lightbox_alt(),
            "Object-Oriented Programming in Java Certificate - IBM"
        );
    }

    #[test]
    fn certificate_images_are_site_relative() {
        for cert in CERTIFICATES {
            assert!(cert.image.starts_with('/'), "{}", cert.title);
        }
        assert!(FEATURED_CERTIFICATE.image.starts_with('/'));
    }
}
