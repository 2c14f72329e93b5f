use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::models::CareerRequirement;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("career {0:?} appears more than once")]
    DuplicateCareer(String),
}

/// Read-only set of career definitions, in ranking tie-break order.
#[derive(Debug, Clone)]
pub struct Catalog {
    careers: Vec<CareerRequirement>,
}

impl Catalog {
    pub fn from_careers(careers: Vec<CareerRequirement>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for career in &careers {
            if !seen.insert(career.name.as_str()) {
                return Err(CatalogError::DuplicateCareer(career.name.clone()));
            }
        }
        Ok(Self { careers })
    }

    /// Loads a JSON array of careers. Absent fields take their defaults.
    pub fn from_json_path(path: &Path) -> Result<Self, CatalogError> {
        let shown = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: shown.clone(),
            source,
        })?;
        let careers: Vec<CareerRequirement> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: shown.clone(),
                source,
            })?;
        tracing::info!(path = %shown, careers = careers.len(), "loaded custom catalog");
        Self::from_careers(careers)
    }

    pub fn builtin() -> Self {
        Self {
            careers: builtin_careers(),
        }
    }

    pub fn careers(&self) -> &[CareerRequirement] {
        &self.careers
    }

    pub fn get(&self, name: &str) -> Option<&CareerRequirement> {
        self.careers.iter().find(|career| career.name == name)
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.get(name).map(|career| career.description.as_str())
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

fn career(
    name: &str,
    (min_coding, min_logical, min_academic): (u32, u32, u32),
    tech_oriented: bool,
    keywords: &[&str],
    description: &str,
    required_skills: &[&str],
    growth_path: &[&str],
) -> CareerRequirement {
    CareerRequirement {
        name: name.to_string(),
        min_coding,
        min_logical,
        min_academic,
        tech_oriented,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        description: description.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        growth_path: growth_path.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_careers() -> Vec<CareerRequirement> {
    vec![
        career(
            "AI ML Specialist",
            (7, 8, 75),
            true,
            &["Machine Learning", "Data Science", "Python", "TensorFlow"],
            "Designs and develops machine learning models, from data preprocessing and training to deployment and monitoring.",
            &["Python, Java, SQL", "TensorFlow, PyTorch, scikit-learn", "Math and statistics", "Cloud and MLOps tools"],
            &["AI/ML Engineer", "Senior ML Engineer", "Data Scientist", "AI Architect"],
        ),
        career(
            "API Specialist",
            (7, 6, 65),
            true,
            &["REST", "Web Development", "Cloud Computing", "Postman"],
            "Designs, builds and integrates APIs that let applications and services exchange data reliably.",
            &["Java, Node.js, Python", "HTTP, REST and GraphQL", "Postman and OpenAPI", "Cloud deployment basics"],
            &["API Specialist", "Integration Engineer", "API Architect", "Solutions Architect"],
        ),
        career(
            "Application Support Engineer",
            (5, 6, 60),
            true,
            &["Linux", "SQL", "ITIL", "Troubleshooting"],
            "Keeps software applications running smoothly by troubleshooting issues and working with developers on fixes.",
            &["Problem solving", "Application servers and databases", "Python or Bash scripting", "Monitoring tools such as Splunk or ELK"],
            &["Application Support Engineer", "Senior Support Engineer", "Application Support Manager"],
        ),
        career(
            "Business Analyst",
            (3, 7, 65),
            false,
            &["Business Analytics", "Excel", "Management", "Requirements"],
            "Bridges IT and the business by analysing needs, documenting requirements and guiding solutions.",
            &["Analytical thinking", "Business process modelling", "Excel and SQL", "Stakeholder communication"],
            &["Business Analyst", "Senior Business Analyst", "Business Analysis Manager"],
        ),
        career(
            "Customer Service Executive",
            (1, 4, 50),
            false,
            &["Communication", "CRM", "Soft Skills"],
            "Handles customer inquiries, resolves issues and keeps customers informed about products and services.",
            &["Communication", "Patience and empathy", "CRM software", "Working under pressure"],
            &["Customer Service Executive", "Team Lead", "Customer Service Manager"],
        ),
        career(
            "Cyber Security Specialist",
            (6, 8, 70),
            true,
            &["Ethical Hacking", "Cyber Security", "CEH", "Networking"],
            "Protects systems and networks from cyber threats by hardening defences, monitoring activity and responding to incidents.",
            &["Network security protocols", "Firewalls and intrusion detection", "ISO 27001 and GDPR", "CISSP, CEH or Security+"],
            &["Security Analyst", "Cyber Security Specialist", "Cyber Security Manager"],
        ),
        career(
            "Database Administrator",
            (6, 7, 65),
            true,
            &["SQL", "Oracle DBA", "Database Design", "Cloud Computing"],
            "Manages databases for availability, performance and security, including backup and recovery.",
            &["Oracle, SQL Server, MySQL", "Query optimisation", "Backup and recovery", "Database security"],
            &["Database Administrator", "Senior DBA", "Database Manager"],
        ),
        career(
            "Graphics Designer",
            (2, 4, 50),
            false,
            &["UI/UX Design", "Photoshop", "Illustrator"],
            "Creates visual content for print and digital media using design tools.",
            &["Adobe Creative Suite, CorelDRAW", "Colour theory and typography", "Creativity", "Working to deadlines"],
            &["Graphics Designer", "Senior Graphics Designer", "Art Director", "Creative Director"],
        ),
        career(
            "Hardware Engineer",
            (5, 8, 70),
            true,
            &["Embedded Systems", "IoT", "Circuit Design", "CompTIA A+"],
            "Designs, develops and tests computer hardware such as processors, circuit boards and memory devices.",
            &["Electronics and circuit design", "VHDL or Verilog", "Simulation and testing tools", "Problem solving"],
            &["Hardware Engineer", "Senior Hardware Engineer", "Hardware Architect"],
        ),
        career(
            "Helpdesk Engineer",
            (3, 5, 55),
            true,
            &["Troubleshooting", "CompTIA A+", "ITIL", "Windows"],
            "Provides technical support to end users, resolving hardware and software problems.",
            &["Computer hardware and software", "Ticketing systems", "Communication", "CompTIA A+ or ITIL"],
            &["Helpdesk Engineer", "Senior Helpdesk Engineer", "IT Support Manager"],
        ),
        career(
            "Information Security Specialist",
            (6, 8, 70),
            true,
            &["Cyber Security", "CISSP", "Risk Assessment", "Ethical Hacking"],
            "Protects data, networks and systems, investigates breaches and ensures compliance with data protection rules.",
            &["Networking and operating systems", "Firewalls, IDS/IPS, VPNs, encryption", "Vulnerability assessment", "Python, Bash or PowerShell"],
            &["Information Security Specialist", "Security Engineer", "Security Architect", "CISO"],
        ),
        career(
            "Network Engineer",
            (5, 7, 65),
            true,
            &["Networking", "CCNA", "Cloud Computing", "Linux"],
            "Designs, builds and maintains the communication networks that keep organisations connected.",
            &["TCP/IP, DNS, OSPF, BGP", "Cisco or Juniper equipment", "Wireshark or SolarWinds", "CCNA or Network+"],
            &["Network Engineer", "Senior Network Engineer", "Network Architect"],
        ),
        career(
            "Project Manager",
            (3, 7, 65),
            false,
            &["Management", "PMP", "Agile", "Leadership"],
            "Plans and oversees projects, coordinating teams and resources to deliver on time and within budget.",
            &["Leadership and organisation", "Jira, Trello, MS Project", "Agile, Scrum, Waterfall", "Budget and risk management"],
            &["Project Coordinator", "Project Manager", "Senior Project Manager", "Program Manager"],
        ),
        career(
            "Software Developer",
            (8, 7, 70),
            true,
            &["Web Development", "Python", "Java", "Hackathon"],
            "Designs, codes, tests and maintains software applications across languages and frameworks.",
            &["Java, Python, C++", "Agile and Scrum", "Git", "Databases and web technologies"],
            &["Junior Developer", "Software Developer", "Senior Developer", "Tech Lead"],
        ),
        career(
            "Software Tester",
            (5, 7, 60),
            true,
            &["Software Testing", "Selenium", "ISTQB", "Java"],
            "Finds bugs, verifies fixes and validates that software meets quality standards before release.",
            &["SDLC and STLC", "Selenium, JIRA, Postman", "Test automation scripting", "Attention to detail"],
            &["Software Tester", "QA Engineer", "Test Lead", "QA Manager"],
        ),
        career(
            "Technical Writer",
            (2, 5, 60),
            false,
            &["Technical Writing", "Documentation", "Communication"],
            "Writes clear, accurate documentation that explains technical products to users and developers.",
            &["Written communication", "Technical concepts and APIs", "Markdown, Confluence, Swagger", "Consistent writing style"],
            &["Junior Technical Writer", "Technical Writer", "Senior Technical Writer", "Documentation Manager"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_has_unique_names() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 16);
        assert!(Catalog::from_careers(catalog.careers().to_vec()).is_ok());
    }

    #[test]
    fn builtin_thresholds_are_positive() {
        for career in Catalog::builtin().careers() {
            assert!(career.min_coding > 0, "{}", career.name);
            assert!(career.min_logical > 0, "{}", career.name);
            assert!(career.min_academic > 0, "{}", career.name);
            assert!(!career.keywords.is_empty(), "{}", career.name);
        }
    }

    #[test]
    fn builtin_careers_list_skills_and_growth() {
        for career in Catalog::builtin().careers() {
            assert!(!career.required_skills.is_empty(), "{}", career.name);
            assert!(!career.growth_path.is_empty(), "{}", career.name);
        }
    }

    #[test]
    fn description_lookup_by_name() {
        let catalog = Catalog::builtin();
        assert!(catalog
            .description("Network Engineer")
            .is_some_and(|text| text.contains("networks")));
        assert!(catalog.description("Astronaut").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        let careers = vec![
            career("Analyst", (1, 1, 1), false, &[], "", &[], &[]),
            career("Analyst", (2, 2, 2), true, &[], "", &[], &[]),
        ];
        let err = Catalog::from_careers(careers).expect_err("duplicate");
        assert!(matches!(err, CatalogError::DuplicateCareer(name) if name == "Analyst"));
    }

    #[test]
    fn loads_custom_catalog_from_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).expect("create");
        write!(
            file,
            r#"[{{"name": "Archivist", "min_academic": 60, "keywords": ["History"]}},
                {{"name": "Pilot", "tech_oriented": true}}]"#
        )
        .expect("write");

        let catalog = Catalog::from_json_path(&path).expect("load");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.careers()[0].name, "Archivist");
        assert_eq!(catalog.get("Pilot").map(|c| c.tech_oriented), Some(true));
    }

    #[test]
    fn malformed_catalog_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{not json").expect("write");
        assert!(matches!(
            Catalog::from_json_path(&path),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::from_careers(vec![]).expect("empty");
        assert!(catalog.is_empty());
    }
}
