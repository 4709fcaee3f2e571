//! Static catalog content, one block per language.

#[rustfmt::skip]
pub const ENGLISH_TOPICS: &[&str] = &[
    "gratitude", "forgiveness", "healing", "strength", "protection",
    "guidance", "peace", "love", "compassion", "courage",
    "wisdom", "patience", "faith", "hope", "charity", "kindness",
    "understanding", "reconciliation", "unity", "humility",
    "mercy", "justice", "truth", "joy", "grace", "devotion",
    "reverence", "redemption", "salvation", "praise", "thanksgiving",
    "intercession", "confession", "consecration", "dedication",
    "adoration", "benediction", "petition", "supplication",
    "lamentation", "meditation", "reflection", "renewal",
    "revival", "restoration", "sanctification", "deliverance",
    "enlightenment", "faithfulness", "fidelity", "sincerity",
    "sobriety", "chastity", "simplicity", "stewardship", "evangelism",
    "discipleship", "servanthood", "mission", "vocation", "ministry",
    "fellowship", "community", "family", "marriage", "parenting",
    "friendship", "work", "school", "learning", "teaching", "growth",
    "maturity", "perseverance", "endurance", "provision", "safety",
    "peacekeeping", "defense", "healing of nations", "environment",
    "creation", "animal welfare", "agriculture", "science",
    "technology", "arts", "literature", "music", "sports", "leisure",
    "health", "mental health", "well-being", "prosperity", "wealth",
    "poverty", "equality", "freedom", "human rights", "democracy",
    "government", "leadership",
];

#[rustfmt::skip]
pub const ENGLISH_WRITERS: &[&str] = &[
    "William Shakespeare", "Jane Austen", "Charles Dickens", "Leo Tolstoy", "Mark Twain",
    "Homer", "Edgar Allan Poe", "J.K. Rowling", "George Orwell", "Ernest Hemingway",
    "Fyodor Dostoevsky", "Emily Dickinson", "Virginia Woolf", "James Joyce", "Gabriel Garcia Marquez",
    "Franz Kafka", "F. Scott Fitzgerald", "Herman Melville", "T.S. Eliot", "John Steinbeck",
    "Oscar Wilde", "Mary Shelley", "H.G. Wells", "George Eliot", "Thomas Hardy",
    "Ralph Waldo Emerson", "Henry David Thoreau", "Walt Whitman", "Robert Frost", "Maya Angelou",
    "Sylvia Plath", "Toni Morrison", "Harper Lee", "Kurt Vonnegut", "Ray Bradbury",
    "J.R.R. Tolkien", "C.S. Lewis", "Isaac Asimov", "Arthur C. Clarke", "Philip K. Dick",
    "Margaret Atwood", "Ursula K. Le Guin", "Aldous Huxley", "H.P. Lovecraft", "Agatha Christie",
    "Arthur Conan Doyle", "J.D. Salinger", "Jack Kerouac", "Ernest J. Gaines", "Octavia E. Butler",
    "Vladimir Nabokov", "E. E. Cummings", "D.H. Lawrence", "William Faulkner", "Tennessee Williams",
    "L. Frank Baum", "Louisa May Alcott", "Jules Verne", "Robert Louis Stevenson", "Nathaniel Hawthorne",
    "Charles Baudelaire", "Marcel Proust", "Albert Camus", "Jean-Paul Sartre", "Simone de Beauvoir",
    "Isabel Allende", "Pablo Neruda", "Jorge Luis Borges", "Carlos Fuentes",
    "Mario Vargas Llosa", "Miguel de Cervantes", "Edith Wharton", "Thomas Mann", "Herman Hesse",
];

#[rustfmt::skip]
pub const FRENCH_TOPICS: &[&str] = &[
    "gratitude", "pardon", "guérison", "force", "protection",
    "guidance", "paix", "amour", "compassion", "courage",
    "sagesse", "patience", "foi", "espérance", "charité", "bonté",
    "compréhension", "réconciliation", "unité", "humilité",
    "miséricorde", "justice", "vérité", "joie", "grâce", "dévotion",
    "louange", "action de grâce", "intercession", "confession",
    "adoration", "bénédiction", "supplication", "méditation",
    "renouveau", "délivrance", "fidélité", "simplicité",
    "communauté", "famille", "mariage", "amitié", "travail",
    "école", "persévérance", "création", "santé", "liberté",
];

#[rustfmt::skip]
pub const FRENCH_WRITERS: &[&str] = &[
    "Victor Hugo", "Molière", "Jean de La Fontaine", "Voltaire", "Jean-Jacques Rousseau",
    "Honoré de Balzac", "Gustave Flaubert", "Émile Zola", "Alexandre Dumas", "Stendhal",
    "Charles Baudelaire", "Arthur Rimbaud", "Paul Verlaine", "Marcel Proust", "Albert Camus",
    "Jean-Paul Sartre", "Simone de Beauvoir", "Antoine de Saint-Exupéry", "Marguerite Duras", "Colette",
    "Blaise Pascal", "Michel de Montaigne", "Jean Racine", "Pierre Corneille", "Paul Claudel",
    "Charles Péguy", "François Mauriac", "Georges Bernanos", "Guillaume Apollinaire", "Léopold Sédar Senghor",
];

#[rustfmt::skip]
pub const ARABIC_TOPICS: &[&str] = &[
    "الامتنان", "المغفرة", "الشفاء", "القوة", "الحماية",
    "الهداية", "السلام", "المحبة", "الرحمة", "الشجاعة",
    "الحكمة", "الصبر", "الإيمان", "الرجاء", "الإحسان", "اللطف",
    "التفاهم", "المصالحة", "الوحدة", "التواضع",
    "العدل", "الحق", "الفرح", "النعمة", "التقوى",
    "الحمد", "الشكر", "التوبة", "الدعاء", "التأمل",
    "التجديد", "الخلاص", "الإخلاص", "البساطة",
    "الأسرة", "الزواج", "الصداقة", "العمل", "العلم",
    "المثابرة", "الخلق", "الصحة", "الحرية",
];

#[rustfmt::skip]
pub const ARABIC_WRITERS: &[&str] = &[
    "نجيب محفوظ", "جبران خليل جبران", "محمود درويش", "طه حسين", "نزار قباني",
    "أحمد شوقي", "المتنبي", "جلال الدين الرومي", "توفيق الحكيم", "ميخائيل نعيمة",
    "إيليا أبو ماضي", "بدر شاكر السياب", "أدونيس", "غسان كنفاني", "الطيب صالح",
    "أبو العلاء المعري", "ابن عربي", "رابعة العدوية", "مي زيادة", "فدوى طوقان",
];
