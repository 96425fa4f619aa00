//! Bundled reference timeline
//!
//! The built-in collection adopted when neither a shared snapshot nor a
//! persisted timeline exists, and the target of a reset. Ids are fixed so a
//! reset always yields the same set.

use crate::models::{placeholder_image, Category, Entry};

fn entry(
    id: &str,
    title: &str,
    title_zh: &str,
    display_date: &str,
    display_date_zh: &str,
    sort_year: f64,
    description: &str,
    description_zh: &str,
    category: Category,
    tags: &[&str],
    tags_zh: &[&str],
) -> Entry {
    Entry {
        id: id.to_string(),
        title: title.to_string(),
        title_zh: Some(title_zh.to_string()),
        display_date: display_date.to_string(),
        display_date_zh: Some(display_date_zh.to_string()),
        sort_year,
        description: description.to_string(),
        description_zh: Some(description_zh.to_string()),
        category,
        image_url: Some(placeholder_image(id)),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        tags_zh: Some(tags_zh.iter().map(|t| t.to_string()).collect()),
    }
}

/// The built-in reference set, Tang dynasty through the Republic era
pub fn default_entries() -> Vec<Entry> {
    vec![
        entry(
            "tang-sancai",
            "Tang Sancai Glazed Wares",
            "唐三彩",
            "c. 700 AD",
            "约公元700年",
            700.0,
            "Three-color lead-glazed earthenware of the Tang court: amber, green, \
             and cream glazes running freely over camels, horses, and tomb guardians.",
            "唐代宫廷的三彩铅釉陶器：琥珀色、绿色与乳白色的釉彩在骆驼、马匹与镇墓兽上自由流淌。",
            Category::Course,
            &["tang", "sancai", "earthenware"],
            &["唐代", "三彩", "陶器"],
        ),
        entry(
            "song-ru-ware",
            "Ru Ware of the Northern Song",
            "北宋汝窑",
            "c. 1100 AD",
            "约公元1100年",
            1100.0,
            "The rarest of the Five Great Kilns. Sky-blue glaze with a fine ice \
             crackle, made for the court of Emperor Huizong for barely two decades.",
            "五大名窑之首。天青色釉面带有细密冰裂纹，为宋徽宗宫廷烧造，前后不过二十余年。",
            Category::Course,
            &["song", "ru-ware", "celadon"],
            &["宋代", "汝窑", "青瓷"],
        ),
        entry(
            "yuan-blue-white",
            "Yuan Blue-and-White Emerges",
            "元青花的兴起",
            "c. 1351 AD",
            "约公元1351年",
            1351.0,
            "Cobalt imported along the maritime routes meets Jingdezhen porcelain \
             stone. The David Vases fix the date; a global export style is born.",
            "沿海路进口的钴料与景德镇瓷石相遇。大维德花瓶确定了纪年，一种行销全球的风格由此诞生。",
            Category::Historical,
            &["yuan", "blue-and-white", "jingdezhen", "cobalt"],
            &["元代", "青花", "景德镇"],
        ),
        entry(
            "zheng-he-export",
            "Zheng He and the Porcelain Trade",
            "郑和与瓷器贸易",
            "1405 AD",
            "公元1405年",
            1405.0,
            "The treasure fleets carry blue-and-white to the Persian Gulf and East \
             Africa; shards along the routes still map the voyages today.",
            "宝船队将青花瓷运往波斯湾与东非；航线沿途的瓷片至今仍勾勒着航程。",
            Category::Historical,
            &["ming", "trade", "maritime"],
            &["明代", "贸易", "海上丝路"],
        ),
        entry(
            "xuande-reign-marks",
            "Xuande Imperial Reign Marks",
            "宣德官窑款识",
            "1426-1435 AD",
            "公元1426-1435年",
            1426.0,
            "The Xuande reign standardizes six-character marks on imperial \
             blue-and-white. Heaped-and-piled cobalt becomes the connoisseur's tell.",
            "宣德朝确立了官窑青花六字款的规制。苏麻离青的铁锈斑成为鉴赏家的依据。",
            Category::Course,
            &["ming", "xuande", "reign-marks"],
            &["明代", "宣德", "款识"],
        ),
        entry(
            "chenghua-chicken-cup",
            "Chenghua Doucai Chicken Cups",
            "成化斗彩鸡缸杯",
            "c. 1465 AD",
            "约公元1465年",
            1465.0,
            "Underglaze blue outlines filled with overglaze enamels. Palm-sized \
             cups that became the most imitated porcelain in Chinese history.",
            "釉下青花勾线，釉上填彩。掌心大小的杯子，成为中国历史上被仿制最多的瓷器。",
            Category::Course,
            &["ming", "chenghua", "doucai"],
            &["明代", "成化", "斗彩"],
        ),
        entry(
            "kangxi-famille-verte",
            "Kangxi Famille Verte",
            "康熙五彩",
            "c. 1690 AD",
            "约公元1690年",
            1690.0,
            "Brilliant green-dominated overglaze palettes on export and imperial \
             wares alike, as the Qing kilns at Jingdezhen rebuild after war.",
            "以绿彩为主的釉上彩绘，外销与官窑并举，景德镇御窑在战后重建中复兴。",
            Category::Course,
            &["qing", "kangxi", "famille-verte"],
            &["清代", "康熙", "五彩"],
        ),
        entry(
            "qianlong-famille-rose",
            "Qianlong Famille Rose",
            "乾隆粉彩",
            "c. 1740 AD",
            "约公元1740年",
            1740.0,
            "Opaque rose enamels from Europe complete the palette. Technical \
             virtuosity peaks; taste becomes a matter of debate.",
            "来自欧洲的不透明胭脂彩补全了色谱。工艺登峰造极，品味则见仁见智。",
            Category::Course,
            &["qing", "qianlong", "famille-rose"],
            &["清代", "乾隆", "粉彩"],
        ),
        entry(
            "grandmother-tea-set",
            "Grandmother's Jingdezhen Tea Set",
            "祖母的景德镇茶具",
            "1965",
            "1965年",
            1965.0,
            "A factory-era rice-grain porcelain tea set, carried through three \
             moves. The piece that started this collection.",
            "一套厂货玲珑瓷茶具，跟着家里搬了三次家。这套茶具是整个收藏的起点。",
            Category::Personal,
            &["family", "rice-grain", "jingdezhen"],
            &["家族", "玲珑瓷", "景德镇"],
        ),
    ]
}
