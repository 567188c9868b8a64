use super::Labels;

pub(super) static ID: Labels = Labels {
    title: "Dasbor Oura",
    comparison: "Perbandingan",
    compare_period_1: "Periode 1 (YYYY-MM-DD / YYYY-MM / YYYY / YYYY-WW)",
    compare_period_2: "Periode 2 (YYYY-MM-DD / YYYY-MM / YYYY / YYYY-WW)",
    upload: "Unggah Data",
    notes: "Catatan",
    add_note: "Tambah Catatan",
    sleep_score: "Skor Tidur",
    activity_score: "Skor Aktivitas",
    readiness_score: "Skor Kesiapan",
    insight: "Insight",
    language: "Bahasa",
    no_comparison: "Masukkan dua periode valid untuk perbandingan.",
    increased: "meningkat",
    decreased: "menurun",
    insight_template: "{field} {direction} {percent}% dibandingkan periode sebelumnya.",
    footer: "Dibuat oleh Susilo Team 2025",
};

pub(super) static EN: Labels = Labels {
    title: "Oura Dashboard",
    comparison: "Comparison",
    compare_period_1: "Period 1 (YYYY-MM-DD / YYYY-MM / YYYY / YYYY-WW)",
    compare_period_2: "Period 2 (YYYY-MM-DD / YYYY-MM / YYYY / YYYY-WW)",
    upload: "Upload Data",
    notes: "Notes",
    add_note: "Add Note",
    sleep_score: "Sleep Score",
    activity_score: "Activity Score",
    readiness_score: "Readiness Score",
    insight: "Insight",
    language: "Language",
    no_comparison: "Enter two valid periods to compare.",
    increased: "increased",
    decreased: "decreased",
    insight_template: "{field} {direction} {percent}% compared to the previous period.",
    footer: "Made by Susilo Team 2025",
};

pub(super) static ZH: Labels = Labels {
    title: "Oura 仪表板",
    comparison: "比较",
    compare_period_1: "期间 1 (YYYY-MM-DD / YYYY-MM / YYYY / YYYY-WW)",
    compare_period_2: "期间 2 (YYYY-MM-DD / YYYY-MM / YYYY / YYYY-WW)",
    upload: "上传数据",
    notes: "笔记",
    add_note: "添加笔记",
    sleep_score: "睡眠评分",
    activity_score: "活动评分",
    readiness_score: "准备评分",
    insight: "洞察",
    language: "语言",
    no_comparison: "请输入两个有效期间进行比较。",
    increased: "提高了",
    decreased: "下降了",
    insight_template: "{field}较上一期间{direction} {percent}%。",
    footer: "Susilo Team 2025 制作",
};
