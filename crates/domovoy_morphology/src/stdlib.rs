//! Standard lexicon for home automation.
//!
//! Covers the verbs, device nouns, room nouns, and colour adjectives that a
//! typical lighting and appliance catalogue uses. Extra vocabulary can be
//! merged with [`MorphAnalyzer::extend`](crate::MorphAnalyzer::extend).

use domovoy_foundation::Result;

use crate::dictionary::parse_dictionary;
use crate::lexicon::Lexicon;

/// Standard dictionary text, in OpenCorpora layout.
pub const DICTIONARY: &str = r#"
1
ВКЛЮЧИТЬ	INFN,perf,tran
ВКЛЮЧИЛ	VERB,perf,tran masc,sing,past,indc
ВКЛЮЧИЛА	VERB,perf,tran femn,sing,past,indc
ВКЛЮЧИЛО	VERB,perf,tran neut,sing,past,indc
ВКЛЮЧИЛИ	VERB,perf,tran plur,past,indc
ВКЛЮЧУ	VERB,perf,tran sing,1per,futr,indc
ВКЛЮЧИШЬ	VERB,perf,tran sing,2per,futr,indc
ВКЛЮЧИТ	VERB,perf,tran sing,3per,futr,indc
ВКЛЮЧИМ	VERB,perf,tran plur,1per,futr,indc
ВКЛЮЧИТЕ	VERB,perf,tran plur,2per,futr,indc
ВКЛЮЧАТ	VERB,perf,tran plur,3per,futr,indc
ВКЛЮЧИ	VERB,perf,tran sing,impr,excl
ВКЛЮЧИТЕ	VERB,perf,tran plur,impr,excl

2
ВЫКЛЮЧИТЬ	INFN,perf,tran
ВЫКЛЮЧИЛ	VERB,perf,tran masc,sing,past,indc
ВЫКЛЮЧИЛА	VERB,perf,tran femn,sing,past,indc
ВЫКЛЮЧИЛО	VERB,perf,tran neut,sing,past,indc
ВЫКЛЮЧИЛИ	VERB,perf,tran plur,past,indc
ВЫКЛЮЧУ	VERB,perf,tran sing,1per,futr,indc
ВЫКЛЮЧИШЬ	VERB,perf,tran sing,2per,futr,indc
ВЫКЛЮЧИТ	VERB,perf,tran sing,3per,futr,indc
ВЫКЛЮЧИМ	VERB,perf,tran plur,1per,futr,indc
ВЫКЛЮЧИТЕ	VERB,perf,tran plur,2per,futr,indc
ВЫКЛЮЧАТ	VERB,perf,tran plur,3per,futr,indc
ВЫКЛЮЧИ	VERB,perf,tran sing,impr,excl
ВЫКЛЮЧИТЕ	VERB,perf,tran plur,impr,excl

3
ОТКРЫТЬ	INFN,perf,tran
ОТКРЫЛ	VERB,perf,tran masc,sing,past,indc
ОТКРЫЛА	VERB,perf,tran femn,sing,past,indc
ОТКРЫЛО	VERB,perf,tran neut,sing,past,indc
ОТКРЫЛИ	VERB,perf,tran plur,past,indc
ОТКРОЮ	VERB,perf,tran sing,1per,futr,indc
ОТКРОЕШЬ	VERB,perf,tran sing,2per,futr,indc
ОТКРОЕТ	VERB,perf,tran sing,3per,futr,indc
ОТКРОЕМ	VERB,perf,tran plur,1per,futr,indc
ОТКРОЕТЕ	VERB,perf,tran plur,2per,futr,indc
ОТКРОЮТ	VERB,perf,tran plur,3per,futr,indc
ОТКРОЙ	VERB,perf,tran sing,impr,excl
ОТКРОЙТЕ	VERB,perf,tran plur,impr,excl

4
ЗАКРЫТЬ	INFN,perf,tran
ЗАКРЫЛ	VERB,perf,tran masc,sing,past,indc
ЗАКРЫЛА	VERB,perf,tran femn,sing,past,indc
ЗАКРЫЛО	VERB,perf,tran neut,sing,past,indc
ЗАКРЫЛИ	VERB,perf,tran plur,past,indc
ЗАКРОЮ	VERB,perf,tran sing,1per,futr,indc
ЗАКРОЕШЬ	VERB,perf,tran sing,2per,futr,indc
ЗАКРОЕТ	VERB,perf,tran sing,3per,futr,indc
ЗАКРОЕМ	VERB,perf,tran plur,1per,futr,indc
ЗАКРОЕТЕ	VERB,perf,tran plur,2per,futr,indc
ЗАКРОЮТ	VERB,perf,tran plur,3per,futr,indc
ЗАКРОЙ	VERB,perf,tran sing,impr,excl
ЗАКРОЙТЕ	VERB,perf,tran plur,impr,excl

5
СДЕЛАТЬ	INFN,perf,tran
СДЕЛАЛ	VERB,perf,tran masc,sing,past,indc
СДЕЛАЛА	VERB,perf,tran femn,sing,past,indc
СДЕЛАЛО	VERB,perf,tran neut,sing,past,indc
СДЕЛАЛИ	VERB,perf,tran plur,past,indc
СДЕЛАЮ	VERB,perf,tran sing,1per,futr,indc
СДЕЛАЕШЬ	VERB,perf,tran sing,2per,futr,indc
СДЕЛАЕТ	VERB,perf,tran sing,3per,futr,indc
СДЕЛАЕМ	VERB,perf,tran plur,1per,futr,indc
СДЕЛАЕТЕ	VERB,perf,tran plur,2per,futr,indc
СДЕЛАЮТ	VERB,perf,tran plur,3per,futr,indc
СДЕЛАЙ	VERB,perf,tran sing,impr,excl
СДЕЛАЙТЕ	VERB,perf,tran plur,impr,excl

6
ЛАМПА	NOUN,inan,femn sing,nomn
ЛАМПЫ	NOUN,inan,femn sing,gent
ЛАМПЕ	NOUN,inan,femn sing,datv
ЛАМПУ	NOUN,inan,femn sing,accs
ЛАМПОЙ	NOUN,inan,femn sing,ablt
ЛАМПОЮ	NOUN,inan,femn sing,ablt,V-oy
ЛАМПЕ	NOUN,inan,femn sing,loct
ЛАМПЫ	NOUN,inan,femn plur,nomn
ЛАМП	NOUN,inan,femn plur,gent
ЛАМПАМ	NOUN,inan,femn plur,datv
ЛАМПЫ	NOUN,inan,femn plur,accs
ЛАМПАМИ	NOUN,inan,femn plur,ablt
ЛАМПАХ	NOUN,inan,femn plur,loct

7
ЛЮСТРА	NOUN,inan,femn sing,nomn
ЛЮСТРЫ	NOUN,inan,femn sing,gent
ЛЮСТРЕ	NOUN,inan,femn sing,datv
ЛЮСТРУ	NOUN,inan,femn sing,accs
ЛЮСТРОЙ	NOUN,inan,femn sing,ablt
ЛЮСТРОЮ	NOUN,inan,femn sing,ablt,V-oy
ЛЮСТРЕ	NOUN,inan,femn sing,loct
ЛЮСТРЫ	NOUN,inan,femn plur,nomn
ЛЮСТР	NOUN,inan,femn plur,gent
ЛЮСТРАМ	NOUN,inan,femn plur,datv
ЛЮСТРЫ	NOUN,inan,femn plur,accs
ЛЮСТРАМИ	NOUN,inan,femn plur,ablt
ЛЮСТРАХ	NOUN,inan,femn plur,loct

8
ШТОРА	NOUN,inan,femn sing,nomn
ШТОРЫ	NOUN,inan,femn sing,gent
ШТОРЕ	NOUN,inan,femn sing,datv
ШТОРУ	NOUN,inan,femn sing,accs
ШТОРОЙ	NOUN,inan,femn sing,ablt
ШТОРОЮ	NOUN,inan,femn sing,ablt,V-oy
ШТОРЕ	NOUN,inan,femn sing,loct
ШТОРЫ	NOUN,inan,femn plur,nomn
ШТОР	NOUN,inan,femn plur,gent
ШТОРАМ	NOUN,inan,femn plur,datv
ШТОРЫ	NOUN,inan,femn plur,accs
ШТОРАМИ	NOUN,inan,femn plur,ablt
ШТОРАХ	NOUN,inan,femn plur,loct

9
СВЕТ	NOUN,inan,masc,Sgtm sing,nomn
СВЕТА	NOUN,inan,masc,Sgtm sing,gent
СВЕТУ	NOUN,inan,masc,Sgtm sing,datv
СВЕТ	NOUN,inan,masc,Sgtm sing,accs
СВЕТОМ	NOUN,inan,masc,Sgtm sing,ablt
СВЕТЕ	NOUN,inan,masc,Sgtm sing,loct

10
ЧАЙНИК	NOUN,inan,masc sing,nomn
ЧАЙНИКА	NOUN,inan,masc sing,gent
ЧАЙНИКУ	NOUN,inan,masc sing,datv
ЧАЙНИК	NOUN,inan,masc sing,accs
ЧАЙНИКОМ	NOUN,inan,masc sing,ablt
ЧАЙНИКЕ	NOUN,inan,masc sing,loct
ЧАЙНИКИ	NOUN,inan,masc plur,nomn
ЧАЙНИКОВ	NOUN,inan,masc plur,gent
ЧАЙНИКАМ	NOUN,inan,masc plur,datv
ЧАЙНИКИ	NOUN,inan,masc plur,accs
ЧАЙНИКАМИ	NOUN,inan,masc plur,ablt
ЧАЙНИКАХ	NOUN,inan,masc plur,loct

11
СПАЛЬНЯ	NOUN,inan,femn sing,nomn
СПАЛЬНИ	NOUN,inan,femn sing,gent
СПАЛЬНЕ	NOUN,inan,femn sing,datv
СПАЛЬНЮ	NOUN,inan,femn sing,accs
СПАЛЬНЕЙ	NOUN,inan,femn sing,ablt
СПАЛЬНЕЮ	NOUN,inan,femn sing,ablt,V-ej
СПАЛЬНЕ	NOUN,inan,femn sing,loct
СПАЛЬНИ	NOUN,inan,femn plur,nomn
СПАЛЕН	NOUN,inan,femn plur,gent
СПАЛЬНЯМ	NOUN,inan,femn plur,datv
СПАЛЬНИ	NOUN,inan,femn plur,accs
СПАЛЬНЯМИ	NOUN,inan,femn plur,ablt
СПАЛЬНЯХ	NOUN,inan,femn plur,loct

12
КУХНЯ	NOUN,inan,femn sing,nomn
КУХНИ	NOUN,inan,femn sing,gent
КУХНЕ	NOUN,inan,femn sing,datv
КУХНЮ	NOUN,inan,femn sing,accs
КУХНЕЙ	NOUN,inan,femn sing,ablt
КУХНЕЮ	NOUN,inan,femn sing,ablt,V-ej
КУХНЕ	NOUN,inan,femn sing,loct
КУХНИ	NOUN,inan,femn plur,nomn
КУХОНЬ	NOUN,inan,femn plur,gent
КУХНЯМ	NOUN,inan,femn plur,datv
КУХНИ	NOUN,inan,femn plur,accs
КУХНЯМИ	NOUN,inan,femn plur,ablt
КУХНЯХ	NOUN,inan,femn plur,loct

13
КОРИДОР	NOUN,inan,masc sing,nomn
КОРИДОРА	NOUN,inan,masc sing,gent
КОРИДОРУ	NOUN,inan,masc sing,datv
КОРИДОР	NOUN,inan,masc sing,accs
КОРИДОРОМ	NOUN,inan,masc sing,ablt
КОРИДОРЕ	NOUN,inan,masc sing,loct
КОРИДОРЫ	NOUN,inan,masc plur,nomn
КОРИДОРОВ	NOUN,inan,masc plur,gent
КОРИДОРАМ	NOUN,inan,masc plur,datv
КОРИДОРЫ	NOUN,inan,masc plur,accs
КОРИДОРАМИ	NOUN,inan,masc plur,ablt
КОРИДОРАХ	NOUN,inan,masc plur,loct

14
КРАСНЫЙ	ADJF,Qual masc,sing,nomn
КРАСНОГО	ADJF,Qual masc,sing,gent
КРАСНОМУ	ADJF,Qual masc,sing,datv
КРАСНОГО	ADJF,Qual anim,masc,sing,accs
КРАСНЫЙ	ADJF,Qual inan,masc,sing,accs
КРАСНЫМ	ADJF,Qual masc,sing,ablt
КРАСНОМ	ADJF,Qual masc,sing,loct
КРАСНАЯ	ADJF,Qual femn,sing,nomn
КРАСНОЙ	ADJF,Qual femn,sing,gent
КРАСНОЙ	ADJF,Qual femn,sing,datv
КРАСНУЮ	ADJF,Qual femn,sing,accs
КРАСНОЙ	ADJF,Qual femn,sing,ablt
КРАСНОЮ	ADJF,Qual femn,sing,ablt,V-oy
КРАСНОЙ	ADJF,Qual femn,sing,loct
КРАСНОЕ	ADJF,Qual neut,sing,nomn
КРАСНОГО	ADJF,Qual neut,sing,gent
КРАСНОМУ	ADJF,Qual neut,sing,datv
КРАСНОЕ	ADJF,Qual neut,sing,accs
КРАСНЫМ	ADJF,Qual neut,sing,ablt
КРАСНОМ	ADJF,Qual neut,sing,loct
КРАСНЫЕ	ADJF,Qual plur,nomn
КРАСНЫХ	ADJF,Qual plur,gent
КРАСНЫМ	ADJF,Qual plur,datv
КРАСНЫХ	ADJF,Qual anim,plur,accs
КРАСНЫЕ	ADJF,Qual inan,plur,accs
КРАСНЫМИ	ADJF,Qual plur,ablt
КРАСНЫХ	ADJF,Qual plur,loct

15
ЗЕЛЁНЫЙ	ADJF,Qual masc,sing,nomn
ЗЕЛЁНОГО	ADJF,Qual masc,sing,gent
ЗЕЛЁНОМУ	ADJF,Qual masc,sing,datv
ЗЕЛЁНОГО	ADJF,Qual anim,masc,sing,accs
ЗЕЛЁНЫЙ	ADJF,Qual inan,masc,sing,accs
ЗЕЛЁНЫМ	ADJF,Qual masc,sing,ablt
ЗЕЛЁНОМ	ADJF,Qual masc,sing,loct
ЗЕЛЁНАЯ	ADJF,Qual femn,sing,nomn
ЗЕЛЁНОЙ	ADJF,Qual femn,sing,gent
ЗЕЛЁНОЙ	ADJF,Qual femn,sing,datv
ЗЕЛЁНУЮ	ADJF,Qual femn,sing,accs
ЗЕЛЁНОЙ	ADJF,Qual femn,sing,ablt
ЗЕЛЁНОЮ	ADJF,Qual femn,sing,ablt,V-oy
ЗЕЛЁНОЙ	ADJF,Qual femn,sing,loct
ЗЕЛЁНОЕ	ADJF,Qual neut,sing,nomn
ЗЕЛЁНОГО	ADJF,Qual neut,sing,gent
ЗЕЛЁНОМУ	ADJF,Qual neut,sing,datv
ЗЕЛЁНОЕ	ADJF,Qual neut,sing,accs
ЗЕЛЁНЫМ	ADJF,Qual neut,sing,ablt
ЗЕЛЁНОМ	ADJF,Qual neut,sing,loct
ЗЕЛЁНЫЕ	ADJF,Qual plur,nomn
ЗЕЛЁНЫХ	ADJF,Qual plur,gent
ЗЕЛЁНЫМ	ADJF,Qual plur,datv
ЗЕЛЁНЫХ	ADJF,Qual anim,plur,accs
ЗЕЛЁНЫЕ	ADJF,Qual inan,plur,accs
ЗЕЛЁНЫМИ	ADJF,Qual plur,ablt
ЗЕЛЁНЫХ	ADJF,Qual plur,loct

16
ТЁПЛЫЙ	ADJF,Qual masc,sing,nomn
ТЁПЛОГО	ADJF,Qual masc,sing,gent
ТЁПЛОМУ	ADJF,Qual masc,sing,datv
ТЁПЛОГО	ADJF,Qual anim,masc,sing,accs
ТЁПЛЫЙ	ADJF,Qual inan,masc,sing,accs
ТЁПЛЫМ	ADJF,Qual masc,sing,ablt
ТЁПЛОМ	ADJF,Qual masc,sing,loct
ТЁПЛАЯ	ADJF,Qual femn,sing,nomn
ТЁПЛОЙ	ADJF,Qual femn,sing,gent
ТЁПЛОЙ	ADJF,Qual femn,sing,datv
ТЁПЛУЮ	ADJF,Qual femn,sing,accs
ТЁПЛОЙ	ADJF,Qual femn,sing,ablt
ТЁПЛОЮ	ADJF,Qual femn,sing,ablt,V-oy
ТЁПЛОЙ	ADJF,Qual femn,sing,loct
ТЁПЛОЕ	ADJF,Qual neut,sing,nomn
ТЁПЛОГО	ADJF,Qual neut,sing,gent
ТЁПЛОМУ	ADJF,Qual neut,sing,datv
ТЁПЛОЕ	ADJF,Qual neut,sing,accs
ТЁПЛЫМ	ADJF,Qual neut,sing,ablt
ТЁПЛОМ	ADJF,Qual neut,sing,loct
ТЁПЛЫЕ	ADJF,Qual plur,nomn
ТЁПЛЫХ	ADJF,Qual plur,gent
ТЁПЛЫМ	ADJF,Qual plur,datv
ТЁПЛЫХ	ADJF,Qual anim,plur,accs
ТЁПЛЫЕ	ADJF,Qual inan,plur,accs
ТЁПЛЫМИ	ADJF,Qual plur,ablt
ТЁПЛЫХ	ADJF,Qual plur,loct

17
СИНИЙ	ADJF,Qual masc,sing,nomn
СИНЕГО	ADJF,Qual masc,sing,gent
СИНЕМУ	ADJF,Qual masc,sing,datv
СИНЕГО	ADJF,Qual anim,masc,sing,accs
СИНИЙ	ADJF,Qual inan,masc,sing,accs
СИНИМ	ADJF,Qual masc,sing,ablt
СИНЕМ	ADJF,Qual masc,sing,loct
СИНЯЯ	ADJF,Qual femn,sing,nomn
СИНЕЙ	ADJF,Qual femn,sing,gent
СИНЕЙ	ADJF,Qual femn,sing,datv
СИНЮЮ	ADJF,Qual femn,sing,accs
СИНЕЙ	ADJF,Qual femn,sing,ablt
СИНЕЮ	ADJF,Qual femn,sing,ablt,V-ej
СИНЕЙ	ADJF,Qual femn,sing,loct
СИНЕЕ	ADJF,Qual neut,sing,nomn
СИНЕГО	ADJF,Qual neut,sing,gent
СИНЕМУ	ADJF,Qual neut,sing,datv
СИНЕЕ	ADJF,Qual neut,sing,accs
СИНИМ	ADJF,Qual neut,sing,ablt
СИНЕМ	ADJF,Qual neut,sing,loct
СИНИЕ	ADJF,Qual plur,nomn
СИНИХ	ADJF,Qual plur,gent
СИНИМ	ADJF,Qual plur,datv
СИНИХ	ADJF,Qual anim,plur,accs
СИНИЕ	ADJF,Qual inan,plur,accs
СИНИМИ	ADJF,Qual plur,ablt
СИНИХ	ADJF,Qual plur,loct

18
ЯРКИЙ	ADJF,Qual masc,sing,nomn
ЯРКОГО	ADJF,Qual masc,sing,gent
ЯРКОМУ	ADJF,Qual masc,sing,datv
ЯРКОГО	ADJF,Qual anim,masc,sing,accs
ЯРКИЙ	ADJF,Qual inan,masc,sing,accs
ЯРКИМ	ADJF,Qual masc,sing,ablt
ЯРКОМ	ADJF,Qual masc,sing,loct
ЯРКАЯ	ADJF,Qual femn,sing,nomn
ЯРКОЙ	ADJF,Qual femn,sing,gent
ЯРКОЙ	ADJF,Qual femn,sing,datv
ЯРКУЮ	ADJF,Qual femn,sing,accs
ЯРКОЙ	ADJF,Qual femn,sing,ablt
ЯРКОЮ	ADJF,Qual femn,sing,ablt,V-oy
ЯРКОЙ	ADJF,Qual femn,sing,loct
ЯРКОЕ	ADJF,Qual neut,sing,nomn
ЯРКОГО	ADJF,Qual neut,sing,gent
ЯРКОМУ	ADJF,Qual neut,sing,datv
ЯРКОЕ	ADJF,Qual neut,sing,accs
ЯРКИМ	ADJF,Qual neut,sing,ablt
ЯРКОМ	ADJF,Qual neut,sing,loct
ЯРКИЕ	ADJF,Qual plur,nomn
ЯРКИХ	ADJF,Qual plur,gent
ЯРКИМ	ADJF,Qual plur,datv
ЯРКИХ	ADJF,Qual anim,plur,accs
ЯРКИЕ	ADJF,Qual inan,plur,accs
ЯРКИМИ	ADJF,Qual plur,ablt
ЯРКИХ	ADJF,Qual plur,loct

19
В	PREP

20
НА	PREP

21
ПОЖАЛУЙСТА	PRCL
"#;

/// Parses the standard dictionary.
///
/// # Errors
///
/// Returns an error only if [`DICTIONARY`] itself is malformed.
pub fn standard_lexicon() -> Result<Lexicon> {
    parse_dictionary(DICTIONARY)
}
