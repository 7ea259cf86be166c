use crate::topic::TopicRecord;

const BUILTIN: [(&str, &str); 3] = [
    (
        "Binary",
        "Binary is a number system that uses only two digits, 0 and 1. It is fundamental in computing since computers use binary to represent data and instructions. Each binary digit is called a bit. Binary allows computers to perform calculations and store information efficiently.",
    ),
    (
        "Database",
        "A database is a structured collection of data that allows easy access, management, and updating. Databases are used in almost every application to store user data, transactions, or other relevant information. Modern databases use query languages like SQL to manage data. They ensure data integrity, security, and efficient retrieval.",
    ),
    (
        "Photosynthesis",
        "Photosynthesis is the process by which green plants use sunlight to convert carbon dioxide and water into glucose and oxygen. It is the primary source of energy for plants and indirectly for other living organisms. Chlorophyll in the leaves absorbs sunlight to drive the chemical reactions. This process is vital for life on Earth.",
    ),
];

/// The three study topics shipped with SmartStudy.
pub(crate) fn builtin_records() -> Vec<TopicRecord> {
    BUILTIN
        .iter()
        .map(|(topic, explanation)| TopicRecord::new(*topic, *explanation))
        .collect()
}
