use serde::Deserialize;

pub const EMAIL_DOMAIN: &str = "clinic.example";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl Doctor {
    /// Directory entry at 1-based position `id`, with an address derived from the name.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        let email = doctor_email(&name);
        Self { id, name, email }
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// "Dr. Anika Rahman" -> "dr.anika.rahman@clinic.example"
pub fn doctor_email(name: &str) -> String {
    let local = name.to_lowercase().replace(' ', ".").replace("dr.", "dr");
    format!("{local}@{EMAIL_DOMAIN}")
}

/// First character of each space-separated word, at most two, uppercased.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Review {
    pub name: String,
    pub text: String,
}

impl Review {
    pub fn avatar(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "support@smilestudio.com".to_string(),
            phone: "+880-1234-567890".to_string(),
            address: "123 Smile Street, Dhaka, Bangladesh".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub about: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Md Hisham Mahmud".to_string(),
            email: "hisham@example.com".to_string(),
            avatar: "MH".to_string(),
            about: "This is your profile page. You can update your details, check your \
                    appointments, and manage your account."
                .to_string(),
        }
    }
}
