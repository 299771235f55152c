use serde::Deserialize;

#[derive(Deserialize)]
pub struct SignUpFormData {
    #[serde(default)]
    pub email: String,
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Desktop App",
        description: "Access your content from anywhere with our powerful desktop application",
        image: "/assets/custom-images/desktop-app.svg",
        alt: "Desktop application interface screenshot",
    },
    Feature {
        title: "Mobile Experience",
        description: "Stay connected on the go with our mobile-first design",
        image: "/assets/custom-images/mobile-app.svg",
        alt: "Mobile app interface screenshot",
    },
    Feature {
        title: "Cloud Storage",
        description: "Secure cloud storage keeps your data safe and accessible",
        image: "/assets/custom-images/cloud-app.svg",
        alt: "Cloud storage illustration",
    },
];
