//! Static feast tables.
//!
//! Both tables are built once on first use and never mutated afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use lectio_core::types::Locale;
use serde::Serialize;

use super::season::{LiturgicalColor, LiturgicalSeason};

/// A pair of strings, one per published locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bilingual {
    pub pt: &'static str,
    pub en: &'static str,
}

impl Bilingual {
    #[must_use]
    pub const fn new(pt: &'static str, en: &'static str) -> Self {
        Self { pt, en }
    }

    #[must_use]
    pub const fn get(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Pt => self.pt,
            Locale::En => self.en,
        }
    }
}

/// A celebration with its name, colour and daily reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feast {
    pub name: Bilingual,
    pub color: LiturgicalColor,
    pub message: Bilingual,
}

const fn feast(
    name: Bilingual,
    color: LiturgicalColor,
    pt_message: &'static str,
    en_message: &'static str,
) -> Feast {
    Feast {
        name,
        color,
        message: Bilingual::new(pt_message, en_message),
    }
}

/// Feasts whose date is movable, identified by their distance from Easter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MovableFeast {
    AshWednesday,
    PalmSunday,
    HolyThursday,
    GoodFriday,
    EasterSunday,
    DivineMercySunday,
    Ascension,
    Pentecost,
    TrinitySunday,
    CorpusChristi,
    SacredHeart,
}

impl MovableFeast {
    pub const ALL: [Self; 11] = [
        Self::AshWednesday,
        Self::PalmSunday,
        Self::HolyThursday,
        Self::GoodFriday,
        Self::EasterSunday,
        Self::DivineMercySunday,
        Self::Ascension,
        Self::Pentecost,
        Self::TrinitySunday,
        Self::CorpusChristi,
        Self::SacredHeart,
    ];

    /// Days from Easter Sunday (negative before Easter).
    #[must_use]
    pub const fn offset_from_easter(self) -> i64 {
        match self {
            Self::AshWednesday => -46,
            Self::PalmSunday => -7,
            Self::HolyThursday => -3,
            Self::GoodFriday => -2,
            Self::EasterSunday => 0,
            Self::DivineMercySunday => 7,
            Self::Ascension => 39,
            Self::Pentecost => 49,
            Self::TrinitySunday => 56,
            Self::CorpusChristi => 60,
            Self::SacredHeart => 68,
        }
    }

    #[must_use]
    pub const fn feast(self) -> Feast {
        use LiturgicalColor::{Red, Violet, White};
        match self {
            Self::AshWednesday => feast(
                Bilingual::new("Quarta-feira de Cinzas", "Ash Wednesday"),
                Violet,
                "Lembra-te de que és pó e ao pó voltarás. A Quaresma começa com um convite à conversão: rasgai o coração, e não as vestes, e voltai ao Senhor.",
                "Remember that you are dust, and to dust you shall return. Lent opens with a call to conversion: rend your hearts, not your garments, and return to the Lord.",
            ),
            Self::PalmSunday => feast(
                Bilingual::new(
                    "Domingo de Ramos da Paixão do Senhor",
                    "Palm Sunday of the Passion of the Lord",
                ),
                Red,
                "Hosana ao Filho de Davi! Acolhemos o Rei que entra em Jerusalém montado num jumentinho e o seguimos até a cruz.",
                "Hosanna to the Son of David! We welcome the King who enters Jerusalem on a donkey, and we follow him to the cross.",
            ),
            Self::HolyThursday => feast(
                Bilingual::new("Quinta-feira Santa", "Holy Thursday"),
                White,
                "Na Ceia do Senhor, Jesus lava os pés dos discípulos e nos deixa a Eucaristia e o mandamento do amor: fazei isto em memória de mim.",
                "At the Lord's Supper, Jesus washes his disciples' feet and leaves us the Eucharist and the commandment of love: do this in memory of me.",
            ),
            Self::GoodFriday => feast(
                Bilingual::new(
                    "Sexta-feira da Paixão do Senhor",
                    "Good Friday of the Passion of the Lord",
                ),
                Red,
                "Eis o lenho da cruz, do qual pendeu a salvação do mundo. Em silêncio, contemplamos o amor que se entrega até o fim.",
                "Behold the wood of the cross, on which hung the salvation of the world. In silence we contemplate a love that gives itself to the end.",
            ),
            Self::EasterSunday => feast(
                Bilingual::new(
                    "Domingo da Páscoa na Ressurreição do Senhor",
                    "Easter Sunday of the Resurrection of the Lord",
                ),
                White,
                "Cristo ressuscitou, aleluia! O túmulo vazio anuncia que a morte não tem a última palavra. Este é o dia que o Senhor fez para nós.",
                "Christ is risen, alleluia! The empty tomb proclaims that death does not have the last word. This is the day the Lord has made.",
            ),
            Self::DivineMercySunday => feast(
                Bilingual::new("Domingo da Divina Misericórdia", "Divine Mercy Sunday"),
                White,
                "A paz esteja convosco. O Ressuscitado mostra as chagas a Tomé e nos ensina que a misericórdia de Deus é maior que toda dúvida.",
                "Peace be with you. The Risen One shows his wounds to Thomas and teaches us that God's mercy is greater than every doubt.",
            ),
            Self::Ascension => feast(
                Bilingual::new("Ascensão do Senhor", "The Ascension of the Lord"),
                White,
                "Homens da Galileia, por que ficais olhando para o céu? Jesus sobe ao Pai e nos envia a ser suas testemunhas até os confins da terra.",
                "Men of Galilee, why do you stand looking at the sky? Jesus ascends to the Father and sends us to be his witnesses to the ends of the earth.",
            ),
            Self::Pentecost => feast(
                Bilingual::new("Domingo de Pentecostes", "Pentecost Sunday"),
                Red,
                "Vinde, Espírito Santo, enchei os corações dos vossos fiéis. O fogo de Pentecostes faz da Igreja uma só voz em todas as línguas.",
                "Come, Holy Spirit, fill the hearts of your faithful. The fire of Pentecost makes the Church one voice in every tongue.",
            ),
            Self::TrinitySunday => feast(
                Bilingual::new("Santíssima Trindade", "The Most Holy Trinity"),
                White,
                "Glória ao Pai, ao Filho e ao Espírito Santo. Deus é comunhão de amor e nos chama a viver nessa mesma comunhão.",
                "Glory to the Father, and to the Son, and to the Holy Spirit. God is a communion of love and calls us to live in that same communion.",
            ),
            Self::CorpusChristi => feast(
                Bilingual::new(
                    "Santíssimo Corpo e Sangue de Cristo",
                    "The Most Holy Body and Blood of Christ",
                ),
                White,
                "Eu sou o pão vivo descido do céu. Adoramos o Senhor presente na Eucaristia e aprendemos a nos tornar pão partido para os irmãos.",
                "I am the living bread that came down from heaven. We adore the Lord present in the Eucharist and learn to become bread broken for others.",
            ),
            Self::SacredHeart => feast(
                Bilingual::new("Sagrado Coração de Jesus", "The Most Sacred Heart of Jesus"),
                White,
                "Vinde a mim, todos vós que estais cansados. O Coração de Jesus, manso e humilde, é refúgio e descanso para quem nele confia.",
                "Come to me, all you who are weary. The meek and humble Heart of Jesus is refuge and rest for all who trust in him.",
            ),
        }
    }
}

const FIXED_FEASTS_TABLE: [((u32, u32), Feast); 16] = {
    use LiturgicalColor::{Red, Violet, White};
    [
        ((1, 1), feast(
            Bilingual::new("Santa Maria, Mãe de Deus", "Mary, the Holy Mother of God"),
            White,
            "O ano começa sob o olhar de Maria, que guardava todas estas coisas no coração. Que o Senhor te abençoe e te guarde, e te dê a paz.",
            "The year begins under the gaze of Mary, who kept all these things in her heart. The Lord bless you and keep you, and give you peace.",
        )),
        ((1, 6), feast(
            Bilingual::new("Epifania do Senhor", "The Epiphany of the Lord"),
            White,
            "Vimos a sua estrela no Oriente e viemos adorá-lo. Como os magos, oferecemos a Cristo o que temos de melhor.",
            "We saw his star at its rising and have come to do him homage. Like the Magi, we offer Christ the best we have.",
        )),
        ((2, 2), feast(
            Bilingual::new("Apresentação do Senhor", "The Presentation of the Lord"),
            White,
            "Meus olhos viram a tua salvação, luz para iluminar as nações. Com Simeão e Ana, acolhemos Jesus apresentado no Templo.",
            "My eyes have seen your salvation, a light for revelation to the Gentiles. With Simeon and Anna we welcome Jesus presented in the Temple.",
        )),
        ((3, 19), feast(
            Bilingual::new(
                "São José, Esposo da Virgem Maria",
                "Saint Joseph, Spouse of the Blessed Virgin Mary",
            ),
            White,
            "José, homem justo, fez como o anjo lhe ordenara. Seu silêncio obediente nos ensina a guardar o mistério de Deus na vida de cada dia.",
            "Joseph, a righteous man, did as the angel commanded. His obedient silence teaches us to guard God's mystery in everyday life.",
        )),
        ((3, 25), feast(
            Bilingual::new("Anunciação do Senhor", "The Annunciation of the Lord"),
            White,
            "Eis a serva do Senhor; faça-se em mim segundo a tua palavra. No sim de Maria, o Verbo se fez carne e habitou entre nós.",
            "Behold, I am the handmaid of the Lord; may it be done to me according to your word. In Mary's yes, the Word became flesh and dwelt among us.",
        )),
        ((6, 24), feast(
            Bilingual::new(
                "Natividade de São João Batista",
                "The Nativity of Saint John the Baptist",
            ),
            White,
            "Seu nome é João. O precursor nasce para preparar os caminhos do Senhor e nos lembrar que é preciso que Ele cresça e eu diminua.",
            "His name is John. The forerunner is born to prepare the way of the Lord and to remind us that he must increase and I must decrease.",
        )),
        ((6, 29), feast(
            Bilingual::new("São Pedro e São Paulo, Apóstolos", "Saints Peter and Paul, Apostles"),
            Red,
            "Tu és Pedro, e sobre esta pedra edificarei a minha Igreja. As colunas da Igreja nos ensinam a confessar e anunciar Cristo com coragem.",
            "You are Peter, and upon this rock I will build my Church. The pillars of the Church teach us to confess and proclaim Christ with courage.",
        )),
        ((8, 6), feast(
            Bilingual::new("Transfiguração do Senhor", "The Transfiguration of the Lord"),
            White,
            "Este é o meu Filho amado: escutai-o. No monte, a glória de Cristo sustenta a fé dos discípulos para o caminho da cruz.",
            "This is my beloved Son; listen to him. On the mountain, Christ's glory strengthens the disciples' faith for the way of the cross.",
        )),
        ((8, 15), feast(
            Bilingual::new(
                "Assunção de Nossa Senhora",
                "The Assumption of the Blessed Virgin Mary",
            ),
            White,
            "O Poderoso fez em mim maravilhas. Maria elevada ao céu é sinal de esperança para todo o povo de Deus a caminho.",
            "The Mighty One has done great things for me. Mary taken up into heaven is a sign of hope for all God's pilgrim people.",
        )),
        ((9, 14), feast(
            Bilingual::new("Exaltação da Santa Cruz", "The Exaltation of the Holy Cross"),
            Red,
            "Nós vos adoramos, Senhor, e vos bendizemos, porque pela vossa santa cruz remistes o mundo.",
            "We adore you, O Christ, and we bless you, because by your holy cross you have redeemed the world.",
        )),
        ((10, 12), feast(
            Bilingual::new("Nossa Senhora da Conceição Aparecida", "Our Lady of Aparecida"),
            White,
            "Fazei tudo o que Ele vos disser. A Mãe Aparecida, Padroeira do Brasil, continua a apontar para seu Filho.",
            "Do whatever he tells you. Our Lady of Aparecida, Patroness of Brazil, keeps pointing us to her Son.",
        )),
        ((11, 1), feast(
            Bilingual::new("Todos os Santos", "All Saints"),
            White,
            "Felizes os pobres em espírito, porque deles é o Reino dos Céus. A multidão dos santos mostra que a santidade é caminho para todos.",
            "Blessed are the poor in spirit, for theirs is the kingdom of heaven. The multitude of saints shows that holiness is a path for everyone.",
        )),
        ((11, 2), feast(
            Bilingual::new(
                "Comemoração de Todos os Fiéis Defuntos",
                "The Commemoration of All the Faithful Departed",
            ),
            Violet,
            "Eu sou a ressurreição e a vida. Rezamos por nossos falecidos com a esperança de que a vida não é tirada, mas transformada.",
            "I am the resurrection and the life. We pray for our departed in the hope that life is not taken away but changed.",
        )),
        ((12, 8), feast(
            Bilingual::new(
                "Imaculada Conceição de Nossa Senhora",
                "The Immaculate Conception of the Blessed Virgin Mary",
            ),
            White,
            "Alegra-te, cheia de graça, o Senhor está contigo. Preservada de todo pecado, Maria é a aurora da salvação.",
            "Hail, full of grace, the Lord is with you. Preserved from all sin, Mary is the dawn of salvation.",
        )),
        ((12, 12), feast(
            Bilingual::new("Nossa Senhora de Guadalupe", "Our Lady of Guadalupe"),
            White,
            "Não estou eu aqui, que sou tua mãe? A Padroeira da América acompanha os pequenos e os pobres do continente.",
            "Am I not here, I who am your mother? The Patroness of the Americas walks with the little ones and the poor of the continent.",
        )),
        ((12, 25), feast(
            Bilingual::new("Natal do Senhor", "The Nativity of the Lord"),
            White,
            "Hoje nasceu para vós um Salvador, que é o Cristo Senhor. O Verbo se fez carne e armou sua tenda entre nós.",
            "Today a Savior has been born for you, who is Christ the Lord. The Word became flesh and pitched his tent among us.",
        )),
    ]
};

static FIXED_FEASTS: LazyLock<HashMap<(u32, u32), Feast>> =
    LazyLock::new(|| FIXED_FEASTS_TABLE.into_iter().collect());

static MOVABLE_FEASTS: LazyLock<HashMap<i64, MovableFeast>> = LazyLock::new(|| {
    MovableFeast::ALL
        .into_iter()
        .map(|feast| (feast.offset_from_easter(), feast))
        .collect()
});

/// ## Summary
/// Looks up the fixed-date feast celebrated on `month`/`day`, if any.
#[must_use]
pub fn fixed_feast(month: u32, day: u32) -> Option<Feast> {
    FIXED_FEASTS.get(&(month, day)).copied()
}

/// ## Summary
/// Looks up the movable feast falling `offset` days from Easter, if any.
#[must_use]
pub fn movable_feast(offset_from_easter: i64) -> Option<MovableFeast> {
    MOVABLE_FEASTS.get(&offset_from_easter).copied()
}

/// ## Summary
/// Returns the reflection used when no feast applies.
#[must_use]
pub const fn season_message(season: LiturgicalSeason) -> Bilingual {
    match season {
        LiturgicalSeason::Advent => Bilingual::new(
            "Preparai o caminho do Senhor. No Advento, a Igreja vigia em oração e esperança, aguardando a vinda daquele que vem nos salvar.",
            "Prepare the way of the Lord. In Advent the Church keeps watch in prayer and hope, awaiting the coming of the one who comes to save us.",
        ),
        LiturgicalSeason::Christmas => Bilingual::new(
            "O Verbo se fez carne e habitou entre nós. No tempo do Natal, contemplamos Deus que se faz pequeno para estar perto de cada um.",
            "The Word became flesh and dwelt among us. In Christmas Time we contemplate God made small so as to be close to each of us.",
        ),
        LiturgicalSeason::Lent => Bilingual::new(
            "Convertei-vos e crede no Evangelho. A Quaresma nos chama à oração, ao jejum e à caridade, preparando o coração para a Páscoa.",
            "Repent and believe in the Gospel. Lent calls us to prayer, fasting and almsgiving, preparing our hearts for Easter.",
        ),
        LiturgicalSeason::Easter => Bilingual::new(
            "O Senhor ressuscitou verdadeiramente, aleluia! No tempo pascal, a alegria da ressurreição ilumina cada dia da nossa caminhada.",
            "The Lord is truly risen, alleluia! In Easter Time the joy of the resurrection lights up every day of our journey.",
        ),
        LiturgicalSeason::Ordinary => Bilingual::new(
            "Fala, Senhor, que teu servo escuta. No Tempo Comum, a Palavra de Deus acompanha o dia a dia e nos ensina a seguir Jesus na vida simples.",
            "Speak, Lord, your servant is listening. In Ordinary Time the Word of God walks with us day by day and teaches us to follow Jesus in simple things.",
        ),
    }
}
