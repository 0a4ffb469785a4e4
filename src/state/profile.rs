//! Portfolio owner details shown next to the contact form

/// Published contact details of the portfolio owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Anshika Rana",
    email: "anshika2695@gmail.com",
    location: "Punjab, India",
    availability: "Open to freelance projects and internship opportunities",
};
