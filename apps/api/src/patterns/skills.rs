//! Skill dictionaries — five fixed categories plus per-category strength
//! thresholds. Entries are lowercase; matching is word-boundary based so short
//! names ("r", "c", "go") never match inside longer words.

/// One skill category: dictionary entries plus the matched-count thresholds
/// that map to a `Strong` / `Moderate` / `Weak` label.
pub struct SkillLexicon {
    pub key: &'static str,
    pub display: &'static str,
    pub entries: &'static [&'static str],
    pub strong: usize,
    pub moderate: usize,
}

pub const PROGRAMMING_LANGUAGES: &[&str] = &[
    "python", "java", "javascript", "typescript", "c++", "c#", "c", "ruby", "go", "golang",
    "rust", "swift", "kotlin", "scala", "php", "perl", "r", "matlab", "julia", "dart", "lua",
    "haskell", "elixir", "clojure", "f#", "objective-c", "groovy", "vb.net", "visual basic",
    "assembly", "cobol", "fortran", "pascal", "shell", "bash", "powershell", "sql", "plsql",
    "tsql", "html", "css", "sass", "scss", "less",
];

pub const FRAMEWORKS: &[&str] = &[
    // Frontend
    "react", "reactjs", "react.js", "angular", "angularjs", "vue", "vuejs", "vue.js", "svelte",
    "next.js", "nextjs", "nuxt", "nuxtjs", "gatsby", "ember", "backbone", "jquery", "bootstrap",
    "tailwind", "tailwindcss", "material-ui", "mui", "chakra", "ant design", "styled-components",
    // Backend
    "node.js", "nodejs", "express", "expressjs", "fastapi", "django", "flask", "spring",
    "spring boot", "springboot", ".net", "asp.net", "rails", "ruby on rails", "laravel",
    "symfony", "fastify", "koa", "nest", "nestjs", "hapi", "gin", "echo", "fiber", "actix",
    "rocket",
    // Mobile
    "react native", "flutter", "ionic", "xamarin", "swiftui", "jetpack compose",
    // Data/ML
    "tensorflow", "pytorch", "keras", "scikit-learn", "sklearn", "pandas", "numpy", "scipy",
    "matplotlib", "seaborn", "plotly", "opencv", "nltk", "spacy", "huggingface", "transformers",
    "xgboost", "lightgbm",
    // Testing
    "jest", "mocha", "jasmine", "pytest", "junit", "selenium", "cypress", "playwright",
    "puppeteer", "testng", "rspec",
];

pub const TOOLS: &[&str] = &[
    // DevOps & Cloud
    "docker", "kubernetes", "k8s", "aws", "azure", "gcp", "google cloud", "heroku", "vercel",
    "netlify", "digitalocean", "terraform", "ansible", "jenkins", "circleci", "travis",
    "github actions", "gitlab ci", "bamboo", "teamcity", "argo", "helm", "prometheus",
    "grafana", "datadog", "new relic", "splunk", "elk", "elasticsearch", "logstash", "kibana",
    "cloudwatch", "cloudformation", "pulumi", "vagrant",
    // Version control
    "git", "github", "gitlab", "bitbucket", "svn", "mercurial",
    // IDEs & editors
    "vscode", "visual studio code", "intellij", "pycharm", "eclipse", "sublime", "vim",
    "neovim", "emacs", "atom", "webstorm", "android studio", "xcode",
    // Project management
    "jira", "confluence", "trello", "asana", "notion", "monday", "linear", "clickup",
    "basecamp", "azure devops",
    // Design
    "figma", "sketch", "adobe xd", "invision", "zeplin", "photoshop", "illustrator", "canva",
    "after effects", "premiere pro", "indesign",
    // Communication
    "slack", "teams", "discord", "zoom",
    // API & testing tools
    "postman", "insomnia", "swagger", "graphql", "rest", "grpc", "soap",
    // Build & data infra
    "webpack", "vite", "parcel", "rollup", "babel", "eslint", "prettier", "nginx", "apache",
    "redis", "rabbitmq", "kafka", "celery", "airflow", "spark", "hadoop", "hive", "databricks",
    "snowflake", "dbt", "looker", "tableau", "power bi", "metabase", "superset", "alteryx",
    // Marketing tools
    "google analytics", "hubspot", "marketo", "mailchimp", "semrush", "ahrefs", "moz",
    "hootsuite", "buffer", "sprout social",
    // Finance tools
    "bloomberg", "reuters", "sap", "oracle", "quickbooks", "xero", "netsuite", "sage",
    "factset", "capital iq",
    // HR tools
    "workday", "successfactors", "bamboohr", "adp", "greenhouse", "lever",
    "linkedin recruiter", "ultipro", "paychex", "gusto",
    // Healthcare tools
    "epic", "cerner", "meditech", "allscripts", "athenahealth",
    // Engineering tools
    "solidworks", "autocad", "catia", "creo", "nx", "ansys", "matlab", "simulink", "revit",
    "civil 3d", "etabs", "altium", "eagle", "kicad", "orcad", "labview",
    // Legal tools
    "westlaw", "lexisnexis", "relativity", "clio",
    // Real estate tools
    "mls", "yardi", "costar", "argus",
    // Security tools
    "wireshark", "nmap", "metasploit", "burp suite", "crowdstrike", "palo alto", "okta",
    "qualys", "nessus",
];

pub const DATABASES: &[&str] = &[
    "mysql", "postgresql", "postgres", "mongodb", "sqlite", "oracle", "sql server", "mssql",
    "mariadb", "cassandra", "dynamodb", "firebase", "firestore", "couchdb", "neo4j", "redis",
    "memcached", "elasticsearch", "supabase", "planetscale", "cockroachdb", "timescaledb",
    "influxdb", "arangodb", "fauna", "prisma", "mongoose", "sequelize", "typeorm",
    "sqlalchemy", "drizzle", "knex",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "team player", "collaboration",
    "problem solving", "problem-solving", "analytical", "critical thinking", "creativity",
    "adaptability", "flexibility", "time management", "project management", "agile", "scrum",
    "kanban", "public speaking", "presentation", "negotiation", "conflict resolution",
    "mentoring", "coaching", "decision making", "decision-making", "strategic thinking",
    "attention to detail", "detail-oriented", "self-motivated", "initiative",
    "customer service", "stakeholder management", "cross-functional", "remote work",
    "distributed teams", "empathy", "emotional intelligence", "active listening",
    "interpersonal skills", "organizational skills", "multitasking", "work ethic", "patience",
    "cultural awareness", "networking", "persuasion", "accountability", "resourcefulness",
];

/// All five categories, in output order.
pub const LEXICONS: &[SkillLexicon] = &[
    SkillLexicon {
        key: "programming_languages",
        display: "Programming Languages",
        entries: PROGRAMMING_LANGUAGES,
        strong: 3,
        moderate: 2,
    },
    SkillLexicon {
        key: "frameworks",
        display: "Frameworks & Libraries",
        entries: FRAMEWORKS,
        strong: 4,
        moderate: 2,
    },
    SkillLexicon {
        key: "tools",
        display: "Tools & Platforms",
        entries: TOOLS,
        strong: 5,
        moderate: 3,
    },
    SkillLexicon {
        key: "databases",
        display: "Databases",
        entries: DATABASES,
        strong: 2,
        moderate: 1,
    },
    SkillLexicon {
        key: "soft_skills",
        display: "Soft Skills",
        entries: SOFT_SKILLS,
        strong: 4,
        moderate: 2,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicons_cover_five_categories() {
        assert_eq!(LEXICONS.len(), 5);
        assert!(LEXICONS.iter().all(|l| !l.entries.is_empty()));
    }

    #[test]
    fn test_entries_are_lowercase() {
        for lexicon in LEXICONS {
            for entry in lexicon.entries {
                assert_eq!(
                    *entry,
                    entry.to_lowercase(),
                    "dictionary entry {entry} must be lowercase"
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_entries_within_a_category() {
        for lexicon in LEXICONS {
            let mut seen = std::collections::HashSet::new();
            for entry in lexicon.entries {
                assert!(seen.insert(*entry), "duplicate {entry} in {}", lexicon.key);
            }
        }
    }
}
