//! Built-in categories shipped with the app

use super::models::{Category, NewCategory};
use super::registry::{CategoryRegistry, Result};

/// The built-in categories, in display order
pub fn builtin_categories() -> Vec<NewCategory> {
    vec![
        seeded("Medical", "Science", "#F42C38", "medical.png")
            .with_description(
                "Test your knowledge on various medical concepts, anatomy, physiology, and common diseases.",
            )
            .with_card(
                "What is the largest organ in the human body?",
                "The skin is the largest organ, covering about 20 square feet in adults.",
            )
            .with_card(
                "What are the four chambers of the human heart?",
                "The four chambers are the right atrium, right ventricle, left atrium, and left ventricle.",
            )
            .with_card(
                "What is the normal resting heart rate for adults?",
                "60-100 beats per minute is considered normal for adults.",
            ),
        seeded("Harry Potter", "Movies", "#6366f1", "harryPotter.png")
            .with_description(
                "Test your knowledge of the wizarding world, characters, spells, and magical creatures.",
            )
            .with_card("What is Harry Potter's Patronus?", "A stag (like his father's)")
            .with_card("Who is the Half-Blood Prince?", "Severus Snape")
            .with_card(
                "What are the three Unforgivable Curses?",
                "Avada Kedavra (Killing Curse), Crucio (Cruciatus Curse), and Imperio (Imperius Curse)",
            ),
        seeded("Network-Engineer", "BTech", "#006CA5", "engineer.png")
            .with_description(
                "Challenge yourself with networking concepts, protocols, and infrastructure knowledge.",
            )
            .with_card("What does OSI stand for in networking?", "Open Systems Interconnection")
            .with_card(
                "What is the purpose of DHCP?",
                "Dynamic Host Configuration Protocol automatically assigns IP addresses and other network configuration parameters to devices on a network.",
            )
            .with_card(
                "What is the difference between a router and a switch?",
                "A router connects different networks and routes packets between them using IP addresses. A switch connects devices within the same network using MAC addresses.",
            ),
        seeded("Entrepreneur", "Business", "#48a860", "entrepreneur.png")
            .with_description(
                "Test your knowledge of business concepts, startup strategies, and entrepreneurial skills.",
            )
            .with_card(
                "What is a minimum viable product (MVP)?",
                "A product with just enough features to gather validated learning about the product and its continued development.",
            )
            .with_card(
                "What is the difference between B2B and B2C?",
                "B2B (Business-to-Business) involves transactions between businesses, while B2C (Business-to-Consumer) involves transactions directly with end consumers.",
            )
            .with_card(
                "What is bootstrapping in business?",
                "Building a company from the ground up with personal finances or operating revenues rather than external funding.",
            ),
        seeded("General-Knowledge", "General Knowledge", "#ffa500", "general-Knowledge.png")
            .with_description(
                "Test your knowledge across various subjects including history, geography, science, and current affairs.",
            )
            .with_card("Which is the largest ocean on Earth?", "The Pacific Ocean")
            .with_card("What year did the Berlin Wall fall?", "1989")
            .with_card("Who wrote 'War and Peace'?", "Leo Tolstoy"),
        seeded("Lawyer", "Law", "#808000", "Lawyer.png")
            .with_description(
                "Challenge yourself with legal concepts, terminology, and important case knowledge.",
            )
            .with_card(
                "What does 'habeas corpus' mean?",
                "A legal principle ensuring that a prisoner can be released from unlawful detention - literally 'you may have the body'.",
            )
            .with_card(
                "What is the difference between civil and criminal law?",
                "Civil law deals with disputes between individuals/organizations where compensation may be awarded, while criminal law deals with crimes against the state/public where punishment is typically imprisonment or fines.",
            )
            .with_card(
                "What is precedent in law?",
                "A principle where judges are obliged to respect the precedents established by prior decisions.",
            ),
    ]
}

fn seeded(name: &str, department: &str, accent: &str, image: &str) -> NewCategory {
    NewCategory::new(name, department)
        .with_id(Category::id_for_name(name))
        .with_accent(accent)
        .with_image(image)
}

/// Registry pre-filled with the built-in categories
pub fn builtin_registry() -> Result<CategoryRegistry> {
    let mut registry = CategoryRegistry::new();
    for draft in builtin_categories() {
        registry.add(draft)?;
    }
    Ok(registry)
}
