//! Built-in source word lists, one per category.
//!
//! Word order matters: the pairwise combination phase only consumes a prefix
//! of each list, so entries are kept in their curated order. Words are mostly
//! 3-7 characters so padding has room to work with.

/// Gaming, power, and tech themed words.
pub const COOL: &[&str] = &[
    // Gaming
    "GAME", "PLAY", "WIN", "LOSS", "EPIC", "MEGA", "GIGA", "TERA",
    "BOSS", "HERO", "GOD", "KING", "QUEEN", "ACE", "JOKER", "CARD", "DECK", "HAND",
    "BET", "FOLD", "CALL", "RAISE", "BLUFF", "POKER", "FLUSH", "ROYAL", "FULL",
    "PAIR", "TRIPS", "QUADS", "HIGH", "LOW", "WILD", "DRAW", "DEAL",
    // Power words
    "POWER", "FORCE", "ULTRA", "SUPER", "HYPER", "TURBO", "NITRO", "BOOST", "SPEED",
    "FAST", "QUICK", "SWIFT", "RAPID", "FLASH", "BOLT", "SHOCK", "SPARK", "FLAME",
    "FIRE", "ICE", "FROST", "FREEZE", "BURN", "BLAZE", "STORM", "WIND", "GALE",
    // Epic
    "CHAD", "SIGMA", "ALPHA", "BETA", "OMEGA", "DELTA", "GAMMA", "PRIME", "ELITE",
    "PRO", "MASTER", "LEGEND", "MYTH", "FABLE", "SAGA", "TALE", "LORE", "DOOM",
    // Tech
    "TECH", "CYBER", "HACK", "CODE", "DATA", "BYTE", "BIT", "PIXEL", "MATRIX",
    "GRID", "NET", "WEB", "LINK", "NODE", "PORT", "GATE", "CORE", "SYSTEM",
    // Animals
    "DRAGON", "PHOENIX", "WOLF", "BEAR", "LION", "TIGER", "EAGLE", "HAWK", "RAVEN",
    "SHARK", "WHALE", "VIPER", "COBRA", "PYTHON", "BEAST", "MONSTER",
    // Short power words
    "MAX", "MAXX", "NEO", "ZEN", "APEX", "PEAK", "TOP", "BEST", "PURE", "TRUE",
    "REAL", "FAKE", "ANTI", "DARK", "LIGHT", "VOID", "NULL", "ZERO", "ONE", "TWO",
    "RED", "BLUE", "GREEN", "GOLD", "BLACK", "WHITE", "GRAY", "NEON", "GLOW",
];

/// Meme and internet slang words.
pub const LOL: &[&str] = &[
    "LOL", "LMAO", "ROFL", "KEK", "HAHA", "HEHE", "JAJA", "LULZ", "LAWL",
    "MEME", "DANK", "BASED", "CRINGE", "BRUH", "YEET", "YOLO", "SWAG", "LIT",
    "FAM", "SALTY", "TOXIC", "NOOB", "REKT", "PWNED", "OWNED", "GG", "EZ",
    "MLG", "SNIPE", "SCOPE", "TRICK", "SHOT", "COMBO", "CHAIN", "SPREE",
    "TROLL", "BAIT", "TRAP", "PRANK", "JOKE", "JEST", "GAG", "FAIL", "OOPS",
    "DERP", "DUMB", "STUPID", "SILLY", "GOOFY", "WACKY", "CRAZY", "WEIRD", "ODD",
    "SUS", "AMONG", "VENT", "TASK", "VOTE", "EJECT", "CREW", "IMP",
    "POG", "POGGERS", "CHAMP", "HYPE", "VIBE", "MOOD", "FEELS", "COPE", "MALD",
    "SIMP", "STAN", "FLEX", "DRIP", "SAUCE", "BUSSIN", "SHEESH", "OOF", "RIP",
    "PEPEGA", "KAPPA", "OMEGALUL", "KEKW", "MONKAS", "PEPE", "SADGE", "COPIUM",
    "BOOMER", "ZOOMER", "DOOMER", "COOMER", "GOATED", "RATIO", "CLAPPED", "DIFF",
];

/// Gross-out themed words.
pub const GROSS: &[&str] = &[
    "GROSS", "NASTY", "YUCK", "EWW", "BLEH", "BARF", "PUKE", "VOMIT", "HURL",
    "GAG", "SICK", "ILL", "GERM", "VIRUS", "FUNGUS", "MOLD", "ROT", "DECAY",
    "STINK", "STENCH", "REEK", "SMELL", "ODOR", "BOOGER", "SNOT", "MUCUS",
    "SPIT", "DROOL", "SLIME", "OOZE", "GOO", "GUNK", "CRUD", "CRUST", "SCAB",
    "PUS", "BLOOD", "GORE", "FLESH", "MEAT", "BONE", "FAT", "GREASE", "OIL",
    "STICKY", "GUMMY", "PASTE", "GLUE", "TAR", "WAX", "FOAM", "DUST", "DIRT",
    "MUD", "TRASH", "GARBAGE", "WASTE", "JUNK", "TOXIC", "POISON", "VENOM",
    "ACID", "BILE", "PHLEGM", "DISCHARGE", "SEEP", "LEAK", "DRIP", "SQUIRT",
];

/// Adult themed words.
pub const NSFW: &[&str] = &[
    // Basic adult terms
    "SEXY", "HOT", "DAMN", "THICC", "THICK", "JUICY", "BUSTY", "CURVY", "FINE",
    "BANG", "SMASH", "POUND", "SLAM", "THRUST", "GRIND", "RUB", "TOUCH", "FEEL",
    "LICK", "SUCK", "BITE", "KISS", "BLOW", "SWALLOW", "EAT", "TASTE", "DADDY",
    "MOMMY", "BABY", "HONEY", "SUGAR", "SPICE", "NAUGHTY", "BAD", "DIRTY", "NASTY",
    "KINKY", "FETISH", "TEASE", "TEMPT", "SEDUCE", "FLIRT", "HORNY", "LUSTY",
    "PASSION", "DESIRE", "HEAT", "FIRE", "BURN", "WET", "MOIST", "DRIP", "LEAK",
    "HARD", "SOFT", "TIGHT", "LOOSE", "BIG", "HUGE", "TINY", "THICK", "LONG",
    "DEEP", "WIDE", "SPREAD", "OPEN", "CLOSE", "CLAP", "SPANK", "SLAP", "CHOKE",
    "TIE", "BIND", "CUFF", "WHIP", "PADDLE", "PLUG", "TOY", "PLAY", "FUN",
    "STRIP", "NUDE", "BARE", "SKIN", "FLESH", "BODY", "BOOBS", "TITS", "ASS",
    "BUTT", "BOOTY", "CHEEKS", "RACK", "MELONS", "PEACH", "BANANA", "WOOD",
    "BONE", "PIPE", "POLE", "ROD", "STICK", "SHAFT", "TIP", "HEAD", "BALLS",
    "NUTS", "SACK", "PACKAGE", "JUNK", "MEMBER", "UNIT", "TOOL", "PIECE",
    // Explicit terms
    "DICK", "COCK", "PENIS", "DONG", "WANG", "PRICK", "BONER", "STIFFY",
    "PUSSY", "CUNT", "VAGINA", "TWAT", "SNATCH", "COOCH", "MUFF", "POON",
    "CUM", "JIZZ", "SPERM", "LOAD", "NUT", "CREAM", "SPOOGE", "SEED",
    "FUCK", "SCREW", "SHAG", "HUMP", "BONE", "RAIL", "PLOW", "DRILL",
    "SHIT", "PISS", "CRAP", "DUMP", "TURD", "POOP", "DOOKIE", "FART",
    "BITCH", "SLUT", "WHORE", "HOE", "SKANK", "THOT", "TRAMP", "SLAG",
    "BASTARD", "ASSHOLE", "DOUCHE", "PRICK", "FUCKER", "WANKER", "TOSSER",
    // Body parts and actions
    "NIPPLE", "TIT", "BREAST", "CLIT", "LABIA", "VULVA", "ANUS", "HOLE",
    "FINGER", "FIST", "TONGUE", "MOUTH", "LIPS", "THROAT", "GAG", "CHOKE",
    "SQUIRT", "SPRAY", "SHOOT", "BLAST", "PUMP", "THROB", "PULSE", "SWELL",
    "INSERT", "ENTER", "FILL", "STUFF", "STRETCH", "GAP", "SPLIT", "TEAR",
    // Descriptive terms
    "RAW", "ROUGH", "WILD", "FERAL", "PRIMAL", "BEAST", "ANIMAL", "SAVAGE",
    "FILTHY", "RAUNCHY", "VULGAR", "LEWD", "CRUDE", "SMUTTY", "PORN", "XXX",
    "TABOO", "FORBID", "NAUGHTY", "SINFUL", "WICKED", "EVIL", "PERV", "FREAK",
    // Common adult slang
    "MILF", "DILF", "GILF", "COUGAR", "PAWG", "BBW", "BBC", "BWC",
    "DTF", "FWB", "ONS", "NSA", "BDSM", "DOM", "SUB", "SWITCH",
    "EDGING", "CLIMAX", "ORGASM", "FINISH", "RELEASE", "EXPLODE", "ERUPT", "PEAK",
];
