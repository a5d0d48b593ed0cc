//! Static content from the contact page and the team showcase.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub heading: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

pub const CONTACT: ContactCard = ContactCard {
    heading: "Contact Us",
    email: "info@example.com",
    address: "55 Main Street, 2nd block, Malborne, Australia",
    phone: "+000 (123) 456 88",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Nabeel Shaikh – FCA",
        role: "Wealth Advisor",
    },
    TeamMember {
        name: "Saqib Z Siddique",
        role: "Technical Analyst",
    },
    TeamMember {
        name: "Imran Kalim",
        role: "E-Commerce Expert",
    },
    TeamMember {
        name: "Nafees Mazhar",
        role: "Content Creator & Youtuber",
    },
    TeamMember {
        name: "Farid Aliani – CFA",
        role: "Portfolio Management Expert",
    },
    TeamMember {
        name: "Umaima Ansari",
        role: "Amazon Kdp Expert",
    },
    TeamMember {
        name: "Rehan Kazmi – FCA",
        role: "Tax Consultant",
    },
];

/// Template data for the team roster.
#[derive(Debug, Serialize)]
pub struct TeamRoster {
    pub heading: &'static str,
    pub members: &'static [TeamMember],
}

pub fn team_roster() -> TeamRoster {
    TeamRoster {
        heading: "Meet Our Team",
        members: TEAM,
    }
}
