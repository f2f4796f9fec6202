//! Static copy for the landing page.

pub const WELCOME_TITLE: &str = "Selamat Datang - SISFOR Sekolah";
pub const TAGLINE: &str = "Sistem Informasi Manajemen";
pub const HERO_BADGE: &str = "Tutwurihandayani - Memimpin dari Depan";
pub const HERO_SUMMARY: &str = "Platform digital terdepan untuk mengelola administrasi sekolah SMA dengan mudah, efisien, dan terintegrasi.";

pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

pub const BENEFITS: [Highlight; 2] = [
    Highlight {
        title: "Efisiensi Maksimal",
        body: "Otomatisasi proses administrasi sekolah menghemat waktu hingga 70% dan mengurangi kesalahan manual",
    },
    Highlight {
        title: "Keamanan Terjamin",
        body: "Data sekolah dilindungi dengan enkripsi tingkat enterprise dan sistem backup otomatis harian",
    },
];

pub const ABOUT_POINTS: [Highlight; 3] = [
    Highlight {
        title: "Terintegrasi & Terpusat",
        body: "Semua data sekolah dalam satu platform yang terintegrasi, mulai dari data siswa, guru, hingga administrasi keuangan.",
    },
    Highlight {
        title: "Efisien & Otomatis",
        body: "Otomatisasi proses administrasi yang menghemat waktu dan mengurangi kesalahan manual dalam pengelolaan data sekolah.",
    },
    Highlight {
        title: "Aman & Terpercaya",
        body: "Keamanan data terjamin dengan enkripsi tingkat enterprise dan backup otomatis untuk melindungi informasi penting sekolah.",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "500+", label: "Sekolah Terdaftar" },
    Stat { value: "50K+", label: "Siswa Aktif" },
    Stat { value: "5K+", label: "Guru Terdaftar" },
    Stat { value: "99.9%", label: "Uptime System" },
];

pub struct FeatureGroup {
    pub title: &'static str,
    pub items: [&'static str; 4],
}

pub const FEATURE_GROUPS: [FeatureGroup; 4] = [
    FeatureGroup {
        title: "Manajemen Akademik",
        items: [
            "Master Data Siswa",
            "Master Data Guru",
            "Master Data Kelas",
            "Master Data Jurusan",
        ],
    },
    FeatureGroup {
        title: "Kurikulum & Pembelajaran",
        items: [
            "Master Data Pelajaran",
            "Master Data Kurikulum",
            "Jadwal Mengajar",
            "Sistem Penilaian",
        ],
    },
    FeatureGroup {
        title: "Manajemen Operasional",
        items: [
            "Master Data Inventori",
            "Master Data Vendor",
            "Manajemen Pengumuman",
            "Sistem Pelaporan",
        ],
    },
    FeatureGroup {
        title: "Monitoring & Evaluasi",
        items: [
            "Data Pelanggaran Siswa",
            "Data Prestasi Siswa",
            "Analisis Kinerja",
            "Dashboard Analitik",
        ],
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

impl Testimonial {
    /// First letters of the first two words that start with a letter.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const RATING: usize = 5;

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "SISFOR Sekolah benar-benar mengubah cara kami mengelola administrasi. Semua data tersentralisasi dan mudah diakses. Efisiensi kerja meningkat drastis!",
        name: "Dra. Siti Rahayu",
        role: "Kepala Sekolah SMA Negeri 1",
    },
    Testimonial {
        quote: "Sistem penilaian yang otomatis sangat membantu. Tidak perlu lagi menghitung manual, dan laporan bisa langsung dicetak. Sangat praktis!",
        name: "Ahmad Budiman, S.Pd",
        role: "Guru Matematika",
    },
    Testimonial {
        quote: "Interface yang user-friendly membuat staff administrasi mudah beradaptasi. Support team juga sangat responsif membantu.",
        name: "Lisa Marlina",
        role: "Staff Administrasi",
    },
];

pub struct FooterColumn {
    pub title: &'static str,
    pub entries: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Fitur Utama",
        entries: &[
            "Manajemen Siswa",
            "Sistem Penilaian",
            "Absensi Digital",
            "Laporan Akademik",
        ],
    },
    FooterColumn {
        title: "Dukungan",
        entries: &["Panduan Pengguna", "Tutorial Video", "Kontak Support"],
    },
    FooterColumn {
        title: "Kontak",
        entries: &[
            "Email: info@sisfor-sekolah.id",
            "Telepon: (021) 123-4567",
            "Alamat: Jakarta, Indonesia",
        ],
    },
];
