use chrono::{DateTime, Datelike};

pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub pitch: &'static str,
    pub about: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub photo_url: &'static str,
    pub resume_url: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Vikash Kumar",
    initials: "VK",
    title: "Data Science & AI",
    pitch: "I build production-ready machine learning systems, from data pipelines to deep-learning models. I focus on applied research in computer vision and NLP to solve real-world problems.",
    about: "I am passionate about solving real-world problems using data science and AI. My expertise includes Python, CNN, NLP, TensorFlow, Scikit-learn, Hyperparameter Tuning, MySQL, Tableau, OOP, Web Scraping, Data Visualization, and Deep Learning. I enjoy end-to-end ML system building and reproducible research.",
    location: "India",
    availability: "Open to opportunities",
    photo_url: "https://images.unsplash.com/photo-1543269865-cbf427effbad?q=80&w=800&auto=format&fit=crop",
    resume_url: "https://drive.google.com/uc?export=download&id=1bz0E-1oyoDnhgfrqlmWJFlvGDvzCe3dN",
};

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

impl Project {
    /// `"#"` marks a project without a public page
    pub fn has_link(&self) -> bool {
        self.link != "#"
    }
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Fake Job Post Detection",
        description: "Built an ML model to detect fraudulent job postings. Tuned features and pipeline; reached 92% accuracy.",
        tags: &["ML Classification", "Python", "Scikit-learn"],
        link: "https://github.com/vikashcoder8789/JobShield-Intelligent-Fraudulent-Job-Listing-Detector",
    },
    Project {
        title: "Distracted Driver Detection",
        description: "CNN-based classifier for 10 driver-behavior classes using transfer learning (ResNet50). F1: 0.87.",
        tags: &["Computer Vision", "TensorFlow", "CNN"],
        link: "https://www.kaggle.com/code/crazycoder8789/distracted-driver-detection",
    },
    Project {
        title: "Twitter Sentiment Analysis",
        description: "Real-time sentiment classification with TF-IDF + Logistic Regression, deployed with Streamlit.",
        tags: &["NLP", "Logistic Regression", "NLTK"],
        link: "#",
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Percent, 0 to 100
    pub level: u8,
}

impl Skill {
    /// CSS width of the filled bar
    pub fn width(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

pub static SKILLS: [Skill; 6] = [
    Skill {
        name: "Python",
        level: 92,
    },
    Skill {
        name: "TensorFlow / Keras",
        level: 84,
    },
    Skill {
        name: "NLP",
        level: 80,
    },
    Skill {
        name: "Convolutional Neural Network",
        level: 86,
    },
    Skill {
        name: "SQL / MySQL",
        level: 75,
    },
    Skill {
        name: "Tableau",
        level: 75,
    },
];

pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email me",
        href: "mailto:vikash8298020427@gmail.com",
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/vikash-kumar-061a4a2a2",
    },
    ContactLink {
        label: "Github",
        href: "https://github.com/vikashcoder8789",
    },
];

/// Year the site was built, for the footer copyright line.
pub fn build_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or(2025)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}
