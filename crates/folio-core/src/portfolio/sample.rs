//! Built-in content used when no portfolio.toml exists

use super::models::{Contact, Link, Profile, Project, SkillCategory};
use super::Portfolio;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Yadnesh Ranshevare".to_string(),
            initials: Some("YR".to_string()),
            tagline: "Full Stack Developer · AI Explorer".to_string(),
            bio: "I craft intelligent systems at the intersection of AI and elegant software \
                  engineering. Turning complex problems into seamless digital experiences."
                .to_string(),
        },
        projects: vec![
            Project {
                title: "Catalogue Website".to_string(),
                description: "A full-stack e-commerce catalogue platform to showcase factory \
                              products. It also allows easy product management."
                    .to_string(),
                tech: strings(&["Nextjs", "Prisma", "MongoDB"]),
                demo: Some("https://catalogue-website-pink.vercel.app/".to_string()),
                github: Some("https://github.com/Yranshevare/Catalogue_website.git".to_string()),
            },
            Project {
                title: "V-Room".to_string(),
                description: "A secure, login-free chat app for private communication. All data \
                              is automatically deleted after each session."
                    .to_string(),
                tech: strings(&["Nextjs", "Redis", "Socket IO", "Express"]),
                demo: Some("https://v-room.vercel.app/".to_string()),
                github: Some("https://github.com/Yranshevare/V-Room.git".to_string()),
            },
            Project {
                title: "BugToPro AI".to_string(),
                description: "An AI-powered learning platform for developers. It reviews code \
                              and provides intelligent feedback for improvement."
                    .to_string(),
                tech: strings(&["NextJs", "LangChain", "LangGraph", "mongodb", "supabase", "gemini"]),
                demo: None,
                github: Some("https://github.com/Yranshevare/BugToPro_AI.git".to_string()),
            },
        ],
        skills: vec![
            SkillCategory {
                title: "Languages".to_string(),
                skills: strings(&["TypeScript", "Python", "JavaScript"]),
            },
            SkillCategory {
                title: "Frontend".to_string(),
                skills: strings(&["React", "Next.js", "HTML", "CSS", "Tailwind"]),
            },
            SkillCategory {
                title: "Backend".to_string(),
                skills: strings(&["Node.js", "Express.js", "Flask", "prisma", "MongoDB"]),
            },
            SkillCategory {
                title: "Tools".to_string(),
                skills: strings(&["Supabase", "Redis", "Git & Github", "vercel", "render", "Cloudinary"]),
            },
            SkillCategory {
                title: "AI / ML".to_string(),
                skills: strings(&["LangChain", "LangGraph", "MCP SDK", "Numpy", "Pandas", "Scikit Learn"]),
            },
            SkillCategory {
                title: "Domain".to_string(),
                skills: strings(&[
                    "Machine Learning",
                    "AI Applications developer",
                    "System Design",
                    "Full Stack Development",
                ]),
            },
        ],
        contact: Contact {
            email: Some("yranshevare2005@gmail.com".to_string()),
            links: vec![
                Link {
                    name: "GitHub".to_string(),
                    href: "https://github.com/Yranshevare".to_string(),
                },
                Link {
                    name: "LinkedIn".to_string(),
                    href: "https://www.linkedin.com/in/yadnesh-ranshevare".to_string(),
                },
                Link {
                    name: "Instagram".to_string(),
                    href: "https://www.instagram.com/yadnesh_ranshevare".to_string(),
                },
            ],
        },
    }
}
