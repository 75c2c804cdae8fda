/// Minimum answered items (out of 20) for a respondent to be kept.
pub const DEFAULT_MIN_VALID_ITEMS: usize = 18;

pub const BUILTIN_NAME: &str = "AI tools usage and learning effectiveness (ID)";

pub const AI_TOOLS_USAGE_LABEL: &str = "AI tools usage";
pub const LEARNING_EFFECTIVENESS_LABEL: &str = "Learning effectiveness";

pub const AI_TOOLS_USAGE: &[&str] = &[
    "Saya menggunakan AI tools untuk membantu memahami materi kuliah.",
    "AI tools membantu saya menyelesaikan tugas lebih cepat.",
    "AI tools membuat saya lebih mudah menemukan penjelasan konsep.",
    "Saya menggunakan AI tools secara rutin saat belajar mandiri.",
    "AI tools membantu saya merangkum materi kuliah.",
    "Saya menggunakan AI tools untuk mendapatkan ide saat mengerjakan tugas.",
    "AI tools membuat proses belajar saya terasa lebih efisien.",
    "Saya merasa lebih percaya diri belajar dengan bantuan AI tools.",
    "AI tools membantu saya memperbaiki kesalahan dalam tugas atau laporan.",
    "Saya merasa kualitas hasil belajar saya meningkat dengan bantuan AI Tools.",
];

pub const LEARNING_EFFECTIVENESS: &[&str] = &[
    "Saya mampu memahami materi kuliah dengan baik.",
    "Saya dapat menyelesaikan tugas tepat waktu.",
    "Saya mampu fokus saat belajar.",
    "Metode belajar saya terasa semakin efektif.",
    "Produktivitas belajar saya meningkat.",
    "Saya dapat meninjau materi dengan lebih terstruktur.",
    "Saya mampu mengatur waktu belajar dengan baik.",
    "Saya mampu mengingat materi pembelajaran dengan lebih baik.",
    "Saya dapat menyelesaikan lebih banyak materi dalam waktu yang sama.",
    "Saya merasa hasil belajar saya meningkat secara keseluruhan.",
];
