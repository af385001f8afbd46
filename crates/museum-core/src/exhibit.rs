use crate::constants::FIRST_DISPLAY_POSITION;
use crate::error::{GalleryError, GalleryResult};
use fnv::FnvHashMap;

/// One museum piece. Exhibits are static data and never change at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct Exhibit {
    pub id: u32,
    pub name: &'static str,
    pub era: &'static str,
    pub description: &'static str,
    /// Narration read aloud by the audio guide.
    pub audio_guide: &'static str,
    /// Slot in the corridor, dense from 1.
    pub position: u32,
    pub images: &'static [&'static str],
    pub detailed_info: &'static str,
}

/// The exhibits on display, ordered by display position.
#[derive(Clone, Debug)]
pub struct Catalog {
    exhibits: Vec<Exhibit>,
    index_by_id: FnvHashMap<u32, usize>,
}

impl Catalog {
    /// Build a catalog, checking ids are unique, positions are dense from 1 and
    /// every exhibit has at least one image.
    pub fn new(mut exhibits: Vec<Exhibit>) -> GalleryResult<Self> {
        if exhibits.is_empty() {
            return Err(GalleryError::InvalidCatalog("catalog is empty".into()));
        }
        exhibits.sort_by_key(|e| e.position);

        let mut index_by_id = FnvHashMap::default();
        for (i, exhibit) in exhibits.iter().enumerate() {
            let expected = FIRST_DISPLAY_POSITION + i as u32;
            if exhibit.position != expected {
                return Err(GalleryError::InvalidCatalog(format!(
                    "exhibit {} has display position {}, expected {}",
                    exhibit.id, exhibit.position, expected
                )));
            }
            if exhibit.images.is_empty() {
                return Err(GalleryError::InvalidCatalog(format!(
                    "exhibit {} has no images",
                    exhibit.id
                )));
            }
            if index_by_id.insert(exhibit.id, i).is_some() {
                return Err(GalleryError::InvalidCatalog(format!(
                    "duplicate exhibit id {}",
                    exhibit.id
                )));
            }
        }
        Ok(Self {
            exhibits,
            index_by_id,
        })
    }

    /// The five pieces shipped with the museum.
    pub fn builtin() -> GalleryResult<Self> {
        Self::new(BUILTIN_EXHIBITS.to_vec())
    }

    pub fn len(&self) -> usize {
        self.exhibits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibits.is_empty()
    }

    /// Highest display position; navigation clamps forward moves here.
    pub fn max_position(&self) -> u32 {
        self.exhibits.last().map(|e| e.position).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exhibit> {
        self.exhibits.iter()
    }

    pub fn by_id(&self, id: u32) -> Option<&Exhibit> {
        self.index_by_id.get(&id).map(|&i| &self.exhibits[i])
    }

    pub fn at_position(&self, position: u32) -> Option<&Exhibit> {
        let offset = position.checked_sub(FIRST_DISPLAY_POSITION)?;
        self.exhibits.get(offset as usize)
    }
}

pub const BUILTIN_EXHIBITS: [Exhibit; 5] = [
    Exhibit {
        id: 1,
        name: "Меч викингов",
        era: "IX век н.э.",
        description: "Боевой меч скандинавских воинов с рукоятью из позолоченной бронзы",
        audio_guide: "Этот меч был найден в захоронении знатного викинга. Орнамент на рукояти указывает на высокий статус владельца.",
        position: 1,
        images: &[
            "https://images.unsplash.com/photo-1516407880455-75f8c75c3a84?w=800",
            "https://images.unsplash.com/photo-1589519160732-57fc498494f8?w=800",
        ],
        detailed_info: "Длина клинка: 85 см. Вес: 1.2 кг. Материал: высокоуглеродистая сталь с узором дамаска.",
    },
    Exhibit {
        id: 2,
        name: "Древнегреческая амфора",
        era: "V век до н.э.",
        description: "Краснофигурная керамическая амфора с изображением мифологических сцен",
        audio_guide: "Амфора использовалась для хранения вина и масла. Роспись выполнена в афинском стиле и изображает подвиги Геракла.",
        position: 2,
        images: &[
            "https://images.unsplash.com/photo-1578749556568-bc2c40e68b61?w=800",
            "https://images.unsplash.com/photo-1582561833392-13840f1e2bbe?w=800",
        ],
        detailed_info: "Высота: 42 см. Обжиг в печи при температуре 1000°C. Найдена в Афинах в 1923 году.",
    },
    Exhibit {
        id: 3,
        name: "Египетский скарабей",
        era: "XIV век до н.э.",
        description: "Золотой амулет-скарабей с иероглифами времён фараона Тутанхамона",
        audio_guide: "Скарабей символизировал воскрешение и вечную жизнь. Носился как защитный амулет знатными египтянами.",
        position: 3,
        images: &[
            "https://images.unsplash.com/photo-1610375461246-83df859d849d?w=800",
            "https://images.unsplash.com/photo-1567696153798-96f42c676e6e?w=800",
        ],
        detailed_info: "Материал: сплав золота 750 пробы. Вес: 15 грамм. Обнаружен в гробнице KV62.",
    },
    Exhibit {
        id: 4,
        name: "Римский гладиус",
        era: "II век н.э.",
        description: "Короткий меч римского легионера с характерной прямой формой клинка",
        audio_guide: "Гладиус был основным оружием римской пехоты. Этот экземпляр принадлежал центуриону III легиона.",
        position: 4,
        images: &[
            "https://images.unsplash.com/photo-1589519160732-57fc498494f8?w=800",
            "https://images.unsplash.com/photo-1516407880455-75f8c75c3a84?w=800",
        ],
        detailed_info: "Длина: 65 см. Двусторонняя заточка. Найден близ Адрианова вала в Британии.",
    },
    Exhibit {
        id: 5,
        name: "Славянская керамика",
        era: "X век н.э.",
        description: "Глиняный горшок с орнаментом древних славян",
        audio_guide: "Эта посуда использовалась в быту для хранения зерна. Узоры несли сакральный смысл и защищали от злых духов.",
        position: 5,
        images: &[
            "https://images.unsplash.com/photo-1582561833392-13840f1e2bbe?w=800",
            "https://images.unsplash.com/photo-1578749556568-bc2c40e68b61?w=800",
        ],
        detailed_info: "Высота: 28 см. Обнаружен при раскопках в Новгороде. Возраст подтверждён радиоуглеродным анализом.",
    },
];
