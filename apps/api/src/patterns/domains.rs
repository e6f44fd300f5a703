//! Domain profiles — 25 industry profiles scored against resume text.
//! Keywords weigh 1, title phrases 3, profile skills 2 (skills only count when
//! the skill extractor already found them).

pub struct DomainProfile {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub titles: &'static [&'static str],
}

pub const DOMAIN_PROFILES: &[DomainProfile] = &[
    // ==================== TECHNOLOGY ====================
    DomainProfile {
        name: "Software / IT",
        keywords: &[
            "software", "developer", "engineer", "programming", "coding", "web", "frontend",
            "backend", "fullstack", "full-stack", "api", "devops", "cloud", "microservices",
            "architecture", "agile", "scrum", "sprint", "deployment", "ci/cd", "testing",
            "debugging", "algorithm", "data structure", "mobile", "ios", "android",
            "app development", "saas", "system design", "scalability",
            "performance optimization",
        ],
        skills: &[
            "python", "java", "javascript", "react", "angular", "vue", "node.js", "docker",
            "kubernetes", "aws", "git", "linux", "typescript", "golang", "rust", "c++", "c#",
        ],
        titles: &[
            "software engineer", "developer", "programmer", "sde", "tech lead",
            "engineering manager", "devops engineer", "solutions architect", "cto",
            "full stack developer",
        ],
    },
    DomainProfile {
        name: "Data Science / AI",
        keywords: &[
            "data", "machine learning", "ml", "artificial intelligence", "ai", "deep learning",
            "neural network", "nlp", "computer vision", "analytics", "statistics", "modeling",
            "prediction", "big data", "etl", "pipeline", "warehouse", "visualization",
            "business intelligence", "bi", "mining", "clustering", "regression",
            "classification", "recommendation system", "a/b testing", "hypothesis",
            "feature engineering",
        ],
        skills: &[
            "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy", "sql", "spark",
            "hadoop", "tableau", "power bi", "r", "sas", "databricks", "snowflake", "airflow",
            "dbt",
        ],
        titles: &[
            "data scientist", "data analyst", "ml engineer", "data engineer", "ai engineer",
            "research scientist", "analytics manager", "business analyst",
            "quantitative analyst",
        ],
    },
    DomainProfile {
        name: "Cybersecurity",
        keywords: &[
            "security", "cybersecurity", "infosec", "penetration testing", "vulnerability",
            "threat", "incident response", "soc", "firewall", "encryption", "authentication",
            "authorization", "compliance", "audit", "risk assessment", "forensics", "malware",
            "phishing", "intrusion detection", "siem", "zero trust", "identity management",
            "access control",
        ],
        skills: &[
            "splunk", "wireshark", "nmap", "metasploit", "burp suite", "kali linux", "nessus",
            "crowdstrike", "palo alto", "okta", "azure ad", "cissp", "ceh", "oscp",
        ],
        titles: &[
            "security analyst", "security engineer", "penetration tester", "soc analyst",
            "ciso", "information security", "cybersecurity analyst",
        ],
    },
    // ==================== BUSINESS ====================
    DomainProfile {
        name: "Marketing",
        keywords: &[
            "marketing", "campaign", "brand", "branding", "digital marketing", "social media",
            "content", "seo", "sem", "ppc", "advertising", "email marketing", "automation",
            "lead generation", "funnel", "conversion", "engagement", "audience", "influencer",
            "copywriting", "creative", "strategy", "growth", "viral", "market research",
            "competitive analysis", "roi",
        ],
        skills: &[
            "google analytics", "hubspot", "marketo", "mailchimp", "facebook ads",
            "google ads", "hootsuite", "buffer", "salesforce marketing cloud",
            "adobe creative", "semrush", "ahrefs", "moz", "canva", "wordpress",
        ],
        titles: &[
            "marketing manager", "digital marketer", "content strategist", "seo specialist",
            "growth marketer", "brand manager", "cmo", "marketing director",
            "social media manager",
        ],
    },
    DomainProfile {
        name: "Finance / Banking",
        keywords: &[
            "finance", "financial", "accounting", "investment", "banking", "trading",
            "portfolio", "risk", "compliance", "audit", "budgeting", "forecasting",
            "valuation", "equity", "fixed income", "derivatives", "hedge fund",
            "private equity", "venture capital", "tax", "treasury", "credit", "underwriting",
            "actuarial", "mergers", "acquisitions", "m&a", "ipo", "due diligence",
        ],
        skills: &[
            "excel", "financial modeling", "bloomberg", "vba", "sql", "sap",
            "oracle financials", "quickbooks", "tableau", "alteryx", "python", "cfa", "cpa",
            "frm",
        ],
        titles: &[
            "financial analyst", "accountant", "investment banker", "portfolio manager",
            "risk analyst", "controller", "cfo", "auditor", "tax consultant",
            "wealth manager", "trader",
        ],
    },
    DomainProfile {
        name: "Sales",
        keywords: &[
            "sales", "selling", "revenue", "quota", "pipeline", "prospecting", "closing",
            "negotiation", "account", "client", "customer", "relationship", "territory",
            "b2b", "b2c", "enterprise", "solution selling", "cold calling", "outreach",
            "demo", "proposal", "upselling", "cross-selling", "churn", "retention",
        ],
        skills: &[
            "salesforce", "hubspot", "linkedin sales navigator", "outreach", "salesloft",
            "gong", "chorus", "zoominfo", "pipedrive", "zoho crm", "apollo",
        ],
        titles: &[
            "sales representative", "account executive", "sales manager",
            "business development", "sales director", "account manager", "sales engineer",
            "vp sales", "inside sales",
        ],
    },
    DomainProfile {
        name: "Human Resources",
        keywords: &[
            "human resources", "hr", "recruiting", "talent acquisition", "onboarding",
            "employee relations", "compensation", "benefits", "payroll", "training",
            "development", "performance management", "hris", "workforce", "retention",
            "engagement", "culture", "diversity", "inclusion", "labor relations",
            "compliance", "succession planning", "organizational development",
        ],
        skills: &[
            "workday", "successfactors", "bamboohr", "adp", "greenhouse", "lever",
            "linkedin recruiter", "ultipro", "paychex", "gusto", "namely", "shrm-cp",
        ],
        titles: &[
            "hr manager", "recruiter", "talent acquisition", "hr business partner",
            "hr generalist", "hr director", "people operations", "chro",
            "compensation analyst", "hrbp",
        ],
    },
    DomainProfile {
        name: "Operations / Supply Chain",
        keywords: &[
            "operations", "supply chain", "logistics", "procurement", "inventory",
            "warehouse", "distribution", "fulfillment", "manufacturing", "production",
            "quality control", "lean", "six sigma", "process improvement",
            "vendor management", "demand planning", "forecasting", "sourcing",
            "transportation", "erp", "mrp", "just-in-time", "kaizen",
        ],
        skills: &[
            "sap", "oracle", "netsuite", "microsoft dynamics", "tableau", "power bi",
            "excel", "sql", "lean six sigma", "pmp", "apics", "cscp",
        ],
        titles: &[
            "operations manager", "supply chain manager", "logistics coordinator",
            "procurement manager", "warehouse manager", "plant manager", "coo",
            "director of operations", "production manager",
        ],
    },
    DomainProfile {
        name: "Consulting",
        keywords: &[
            "consulting", "strategy", "advisory", "management consulting",
            "business transformation", "change management", "stakeholder",
            "client engagement", "proposal", "deliverable", "workstream", "due diligence",
            "market entry", "cost optimization", "organizational design",
            "process reengineering", "benchmarking",
        ],
        skills: &[
            "powerpoint", "excel", "tableau", "sql", "mece", "case study",
            "financial modeling", "project management", "stakeholder management",
        ],
        titles: &[
            "consultant", "associate", "senior consultant", "manager", "principal",
            "partner", "director", "engagement manager", "strategy consultant",
            "management consultant",
        ],
    },
    DomainProfile {
        name: "Project Management",
        keywords: &[
            "project management", "program management", "pmo", "agile", "scrum",
            "waterfall", "kanban", "sprint", "milestone", "timeline", "budget",
            "resource allocation", "risk management", "stakeholder", "deliverable",
            "gantt", "scope", "requirements", "change management", "backlog",
        ],
        skills: &[
            "jira", "asana", "trello", "monday", "ms project", "smartsheet", "confluence",
            "pmp", "prince2", "agile certified", "scrum master", "safe",
        ],
        titles: &[
            "project manager", "program manager", "scrum master", "product owner",
            "pmo director", "delivery manager", "technical project manager", "agile coach",
        ],
    },
    // ==================== HEALTHCARE ====================
    DomainProfile {
        name: "Healthcare / Medical",
        keywords: &[
            "healthcare", "medical", "clinical", "patient", "hospital", "diagnosis",
            "treatment", "therapy", "nursing", "physician", "pharmacy", "surgical",
            "emergency", "icu", "outpatient", "inpatient", "telemedicine", "ehr", "emr",
            "hipaa", "medical records", "insurance", "claims", "billing",
        ],
        skills: &[
            "epic", "cerner", "meditech", "allscripts", "hl7", "fhir", "icd-10", "cpt",
            "medical terminology", "bls", "acls", "registered nurse",
            "licensed practical nurse",
        ],
        titles: &[
            "nurse", "physician", "doctor", "surgeon", "pharmacist", "medical assistant",
            "healthcare administrator", "clinical director", "nursing manager",
            "medical technologist", "therapist",
        ],
    },
    DomainProfile {
        name: "Pharmaceutical / Biotech",
        keywords: &[
            "pharmaceutical", "biotech", "drug development", "clinical trial", "fda",
            "regulatory", "research", "laboratory", "bioinformatics", "genomics",
            "proteomics", "molecular biology", "cell culture", "gmp", "glp",
            "quality assurance", "validation", "formulation",
        ],
        skills: &[
            "sas", "r", "python", "spss", "prism", "veeva", "lims", "pcr", "elisa", "hplc",
            "mass spectrometry", "bioreactor",
        ],
        titles: &[
            "research scientist", "clinical research associate", "regulatory affairs",
            "quality assurance", "medical science liaison", "lab technician",
            "biostatistician", "pharmacovigilance", "medical writer",
        ],
    },
    // ==================== CREATIVE ====================
    DomainProfile {
        name: "Design / UX",
        keywords: &[
            "design", "ui", "ux", "user experience", "user interface", "visual design",
            "graphic design", "product design", "interaction design", "wireframe",
            "prototype", "mockup", "typography", "color theory", "layout", "responsive",
            "usability", "accessibility", "design system", "branding", "user research",
            "persona", "journey map", "information architecture",
        ],
        skills: &[
            "figma", "sketch", "adobe xd", "photoshop", "illustrator", "invision",
            "principle", "framer", "after effects", "zeplin", "miro", "figjam", "protopie",
            "origami",
        ],
        titles: &[
            "designer", "ux designer", "ui designer", "product designer", "graphic designer",
            "creative director", "visual designer", "ux researcher", "design lead",
            "head of design",
        ],
    },
    DomainProfile {
        name: "Content / Media",
        keywords: &[
            "content", "writing", "editing", "journalism", "media", "publishing",
            "copywriting", "blogging", "storytelling", "video production", "podcast",
            "social media", "engagement", "editorial", "press", "communications",
            "public relations", "seo writing", "technical writing", "documentation",
        ],
        skills: &[
            "wordpress", "contentful", "medium", "hubspot", "adobe premiere",
            "final cut pro", "audacity", "grammarly", "hemingway", "ap style",
            "chicago manual",
        ],
        titles: &[
            "content writer", "copywriter", "editor", "journalist", "content manager",
            "content strategist", "technical writer", "communications manager",
            "pr specialist", "social media manager",
        ],
    },
    // ==================== ENGINEERING ====================
    DomainProfile {
        name: "Mechanical Engineering",
        keywords: &[
            "mechanical", "engineering", "cad", "design", "manufacturing", "prototype",
            "testing", "simulation", "fea", "cfd", "thermodynamics", "fluid dynamics",
            "materials", "tolerancing", "gd&t", "machining", "assembly", "hvac",
            "automotive",
        ],
        skills: &[
            "solidworks", "autocad", "catia", "creo", "nx", "ansys", "matlab", "simulink",
            "inventor", "gd&t", "fea", "cfd", "cam",
        ],
        titles: &[
            "mechanical engineer", "design engineer", "manufacturing engineer",
            "project engineer", "product engineer", "r&d engineer", "test engineer",
            "quality engineer", "cae engineer",
        ],
    },
    DomainProfile {
        name: "Electrical / Electronics",
        keywords: &[
            "electrical", "electronics", "circuit", "pcb", "embedded", "firmware", "fpga",
            "microcontroller", "power systems", "control systems", "signal processing",
            "rf", "wireless", "semiconductor", "vlsi", "asic", "iot", "sensors",
        ],
        skills: &[
            "altium", "eagle", "kicad", "orcad", "spice", "verilog", "vhdl", "matlab",
            "labview", "c", "c++", "python", "arduino", "raspberry pi",
        ],
        titles: &[
            "electrical engineer", "electronics engineer", "hardware engineer",
            "embedded engineer", "firmware engineer", "rf engineer",
            "power systems engineer", "control systems engineer",
        ],
    },
    DomainProfile {
        name: "Civil / Construction",
        keywords: &[
            "civil", "construction", "structural", "building", "infrastructure",
            "surveying", "geotechnical", "transportation", "environmental", "concrete",
            "steel", "foundation", "highway", "bridge", "project management",
            "site supervision", "estimating", "safety",
        ],
        skills: &[
            "autocad", "revit", "civil 3d", "etabs", "staad pro", "primavera",
            "ms project", "bluebeam", "procore", "gis", "arcgis", "structural analysis",
        ],
        titles: &[
            "civil engineer", "structural engineer", "construction manager",
            "project engineer", "site engineer", "estimator", "geotechnical engineer",
            "transportation engineer",
        ],
    },
    // ==================== LEGAL ====================
    DomainProfile {
        name: "Legal",
        keywords: &[
            "legal", "law", "attorney", "litigation", "contract", "compliance",
            "regulatory", "intellectual property", "patent", "trademark", "corporate law",
            "mergers", "acquisitions", "due diligence", "dispute resolution", "arbitration",
            "employment law", "privacy", "gdpr", "legal research",
        ],
        skills: &[
            "westlaw", "lexisnexis", "contract management", "document review",
            "legal research", "drafting", "jd", "bar admission", "paralegal certification",
        ],
        titles: &[
            "attorney", "lawyer", "legal counsel", "paralegal", "compliance officer",
            "general counsel", "legal associate", "contract manager", "ip specialist",
            "litigation support",
        ],
    },
    // ==================== EDUCATION ====================
    DomainProfile {
        name: "Education / Academia",
        keywords: &[
            "education", "teaching", "learning", "curriculum", "instruction", "student",
            "classroom", "assessment", "academic", "research", "professor", "lecturer",
            "pedagogy", "e-learning", "lms", "higher education", "k-12",
            "special education", "tutoring",
        ],
        skills: &[
            "canvas", "blackboard", "moodle", "google classroom", "zoom",
            "microsoft teams", "powerpoint", "lesson planning", "curriculum development",
            "assessment design",
        ],
        titles: &[
            "teacher", "professor", "instructor", "tutor", "curriculum developer",
            "instructional designer", "principal", "dean", "education coordinator",
            "academic advisor",
        ],
    },
    // ==================== HOSPITALITY / RETAIL ====================
    DomainProfile {
        name: "Hospitality / Tourism",
        keywords: &[
            "hospitality", "hotel", "restaurant", "tourism", "travel", "guest services",
            "customer service", "front desk", "concierge", "event planning", "catering",
            "food and beverage", "housekeeping", "reservation", "booking",
            "revenue management", "occupancy",
        ],
        skills: &[
            "opera pms", "micros", "sabre", "amadeus", "reservations", "guest management",
            "pos systems", "food safety", "servsafe",
        ],
        titles: &[
            "hotel manager", "restaurant manager", "event coordinator", "front desk agent",
            "concierge", "chef", "server", "travel agent", "tourism manager",
            "hospitality director",
        ],
    },
    DomainProfile {
        name: "Retail / E-commerce",
        keywords: &[
            "retail", "e-commerce", "store", "merchandising", "inventory", "sales",
            "customer service", "visual merchandising", "pos", "omnichannel",
            "fulfillment", "dropshipping", "amazon", "shopify", "conversion rate",
            "basket size", "shrinkage",
        ],
        skills: &[
            "shopify", "magento", "woocommerce", "salesforce commerce", "sap retail",
            "oracle retail", "google analytics", "inventory management", "pos systems",
        ],
        titles: &[
            "store manager", "retail manager", "e-commerce manager", "merchandiser",
            "buyer", "category manager", "sales associate", "visual merchandiser",
            "inventory manager",
        ],
    },
    // ==================== GOVERNMENT / NON-PROFIT ====================
    DomainProfile {
        name: "Government / Public Sector",
        keywords: &[
            "government", "public sector", "policy", "administration", "regulatory",
            "compliance", "legislation", "grants", "public affairs", "civil service",
            "municipal", "federal", "state", "local government", "public administration",
        ],
        skills: &[
            "policy analysis", "grant writing", "public speaking", "legislation tracking",
            "constituent services", "government procurement", "clearance",
        ],
        titles: &[
            "policy analyst", "program manager", "government affairs",
            "public administrator", "civil servant", "legislative aide", "grants manager",
            "compliance officer",
        ],
    },
    DomainProfile {
        name: "Non-Profit / NGO",
        keywords: &[
            "non-profit", "nonprofit", "ngo", "charity", "foundation", "fundraising",
            "grant", "donor", "volunteer", "outreach", "community", "advocacy",
            "social impact", "sustainability", "development", "humanitarian",
            "philanthropy",
        ],
        skills: &[
            "salesforce nonprofit", "bloomerang", "raiser edge", "grant writing",
            "donor management", "volunteer coordination", "event planning",
            "community outreach",
        ],
        titles: &[
            "executive director", "development director", "fundraiser", "program manager",
            "grant writer", "volunteer coordinator", "outreach coordinator",
            "advocacy manager",
        ],
    },
    // ==================== REAL ESTATE ====================
    DomainProfile {
        name: "Real Estate",
        keywords: &[
            "real estate", "property", "commercial", "residential", "leasing", "tenant",
            "landlord", "mortgage", "appraisal", "valuation", "investment", "development",
            "construction", "property management", "brokerage", "mls",
        ],
        skills: &[
            "mls", "yardi", "costar", "argus", "excel", "property management software",
            "cre license", "real estate license", "financial modeling",
        ],
        titles: &[
            "real estate agent", "broker", "property manager", "leasing agent",
            "real estate analyst", "appraiser", "development manager", "asset manager",
        ],
    },
    // ==================== ENTRY LEVEL ====================
    DomainProfile {
        name: "Student / Fresher",
        keywords: &[
            "student", "fresher", "graduate", "university", "college", "intern",
            "internship", "campus", "academic", "thesis", "coursework", "gpa", "cgpa",
            "bachelor", "master", "degree", "certification", "learning", "project",
            "entry level", "junior", "associate", "trainee",
        ],
        skills: &[],
        titles: &[
            "intern", "trainee", "fresher", "graduate", "entry level", "junior",
            "associate", "apprentice",
        ],
    },
];
