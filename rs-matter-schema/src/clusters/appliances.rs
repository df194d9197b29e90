/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Appliance, robotic vacuum and air quality clusters.

clusters! {
    LaundryWasherMode = 0x0051 {
        attributes {
            0x0000 => SupportedModes,
            0x0001 => CurrentMode,
            0x0002 => StartUpMode,
            0x0003 => OnMode,
        }
        events {}
        commands {
            0x00 => ChangeToMode,
        }
    }

    RefrigeratorAndTemperatureControlledCabinetMode = 0x0052 {
        attributes {
            0x0000 => SupportedModes,
            0x0001 => CurrentMode,
            0x0002 => StartUpMode,
            0x0003 => OnMode,
        }
        events {}
        commands {
            0x00 => ChangeToMode,
        }
    }

    LaundryWasherControls = 0x0053 {
        attributes {
            0x0000 => SpinSpeeds,
            0x0001 => SpinSpeedCurrent,
            0x0002 => NumberOfRinses,
            0x0003 => SupportedRinses,
        }
        events {}
        commands {}
    }

    RvcRunMode = 0x0054 {
        attributes {
            0x0000 => SupportedModes,
            0x0001 => CurrentMode,
        }
        events {}
        commands {
            0x00 => ChangeToMode,
        }
    }

    RvcCleanMode = 0x0055 {
        attributes {
            0x0000 => SupportedModes,
            0x0001 => CurrentMode,
        }
        events {}
        commands {
            0x00 => ChangeToMode,
        }
    }

    TemperatureControl = 0x0056 {
        attributes {
            0x0000 => TemperatureSetpoint,
            0x0001 => MinTemperature,
            0x0002 => MaxTemperature,
            0x0003 => Step,
            0x0004 => SelectedTemperatureLevel,
            0x0005 => SupportedTemperatureLevels,
        }
        events {}
        commands {
            0x00 => SetTemperature,
        }
    }

    RefrigeratorAlarm = 0x0057 {
        attributes {
            0x0000 => Mask,
            0x0002 => State,
            0x0003 => Supported,
        }
        events {
            0x00 => Notify,
        }
        commands {}
    }

    DishwasherMode = 0x0059 {
        attributes {
            0x0000 => SupportedModes,
            0x0001 => CurrentMode,
            0x0002 => StartUpMode,
            0x0003 => OnMode,
        }
        events {}
        commands {
            0x00 => ChangeToMode,
        }
    }

    AirQuality = 0x005B {
        attributes {
            0x0000 => AirQuality,
        }
        events {}
        commands {}
    }

    SmokeCoAlarm = 0x005C {
        attributes {
            0x0000 => ExpressedState,
            0x0001 => SmokeState,
            0x0002 => COState,
            0x0003 => BatteryAlert,
            0x0004 => DeviceMuted,
            0x0005 => TestInProgress,
            0x0006 => HardwareFaultAlert,
            0x0007 => EndOfServiceAlert,
            0x0008 => InterconnectSmokeAlarm,
            0x0009 => InterconnectCOAlarm,
            0x000A => ContaminationState,
            0x000B => SmokeSensitivityLevel,
            0x000C => ExpiryDate,
        }
        events {
            0x00 => SmokeAlarm,
            0x01 => COAlarm,
            0x02 => LowBattery,
            0x03 => HardwareFault,
            0x04 => EndOfService,
            0x05 => SelfTestComplete,
            0x06 => AlarmMuted,
            0x07 => MuteEnded,
            0x08 => InterconnectSmokeAlarm,
            0x09 => InterconnectCOAlarm,
            0x0A => AllClear,
        }
        commands {
            0x00 => SelfTestRequest,
        }
    }

    DishwasherAlarm = 0x005D {
        attributes {
            0x0000 => Mask,
            0x0001 => Latch,
            0x0002 => State,
            0x0003 => Supported,
        }
        events {
            0x00 => Notify,
        }
        commands {
            0x00 => Reset,
            0x01 => ModifyEnabledAlarms,
        }
    }

    MicrowaveOvenMode = 0x005E {
        attributes {
            0x0000 => SupportedModes,
            0x0001 => CurrentMode,
        }
        events {}
        commands {}
    }

    MicrowaveOvenControl = 0x005F {
        attributes {
            0x0000 => CookTime,
            0x0001 => MaxCookTime,
            0x0002 => PowerSetting,
            0x0003 => MinPower,
            0x0004 => MaxPower,
            0x0005 => PowerStep,
            0x0006 => SupportedWatts,
            0x0007 => SelectedWattIndex,
            0x0008 => WattRating,
        }
        events {}
        commands {
            0x00 => SetCookingParameters,
            0x01 => AddMoreTime,
        }
    }

    OperationalState = 0x0060 {
        attributes {
            0x0000 => PhaseList,
            0x0001 => CurrentPhase,
            0x0002 => CountdownTime,
            0x0003 => OperationalStateList,
            0x0004 => OperationalState,
            0x0005 => OperationalError,
        }
        events {
            0x00 => OperationalError,
            0x01 => OperationCompletion,
        }
        commands {
            0x00 => Pause,
            0x01 => Stop,
            0x02 => Start,
            0x03 => Resume,
        }
    }

    RvcOperationalState = 0x0061 {
        attributes {
            0x0000 => PhaseList,
            0x0001 => CurrentPhase,
            0x0002 => CountdownTime,
            0x0003 => OperationalStateList,
            0x0004 => OperationalState,
            0x0005 => OperationalError,
        }
        events {
            0x00 => OperationalError,
            0x01 => OperationCompletion,
        }
        commands {
            0x00 => Pause,
            0x03 => Resume,
            0x80 => GoHome,
        }
    }

    HepaFilterMonitoring = 0x0071 {
        attributes {
            0x0000 => Condition,
            0x0001 => DegradationDirection,
            0x0002 => ChangeIndication,
            0x0003 => InPlaceIndicator,
            0x0004 => LastChangedTime,
            0x0005 => ReplacementProductList,
        }
        events {}
        commands {
            0x00 => ResetCondition,
        }
    }

    ActivatedCarbonFilterMonitoring = 0x0072 {
        attributes {
            0x0000 => Condition,
            0x0001 => DegradationDirection,
            0x0002 => ChangeIndication,
            0x0003 => InPlaceIndicator,
            0x0004 => LastChangedTime,
            0x0005 => ReplacementProductList,
        }
        events {}
        commands {
            0x00 => ResetCondition,
        }
    }
}
